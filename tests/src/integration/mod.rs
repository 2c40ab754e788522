//! File-based end-to-end tests for the bootstrap tools.

pub mod peers;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    use serde_json::{json, Value};

    /// Write `value` as JSON under `dir/name` and return the path.
    pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    /// A plausible target genesis document: one validator already present,
    /// plus sections the tools never touch.
    pub fn target_genesis() -> Value {
        json!({
            "chain_id": "bootstrap-1",
            "genesis_time": "2024-01-01T00:00:00Z",
            "consensus_params": { "block": { "max_bytes": "22020096" } },
            "app_state": {
                "auth": {
                    "params": { "max_memo_characters": "256" },
                    "accounts": [ account("val0") ]
                },
                "bank": {
                    "balances": [ balance("val0", "stake", "100") ],
                    "supply": [ { "denom": "stake", "amount": "100" } ],
                    "denom_metadata": []
                },
                "genutil": { "gen_txs": [
                    { "body": { "memo": "id-0@10.0.0.10:26656", "messages": [] } }
                ] },
                "staking": { "params": { "bond_denom": "stake" } }
            }
        })
    }

    /// A gathered per-validator fragment.
    pub fn fragment(name: &str, denom: &str, amount: &str) -> Value {
        json!({
            "app_state": {
                "auth": { "accounts": [ account(name) ] },
                "bank": {
                    "balances": [ balance(name, denom, amount) ],
                    "supply": [ { "denom": denom, "amount": amount } ]
                }
            }
        })
    }

    pub fn account(address: &str) -> Value {
        json!({ "@type": "/cosmos.auth.v1beta1.BaseAccount", "address": address })
    }

    pub fn balance(address: &str, denom: &str, amount: &str) -> Value {
        json!({ "address": address, "coins": [ { "denom": denom, "amount": amount } ] })
    }
}
