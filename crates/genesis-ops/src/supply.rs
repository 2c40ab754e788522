//! Per-denomination supply aggregation.
//!
//! Every genesis document carries a `bank.supply` list with at most one
//! entry per denomination. Concatenating documents therefore produces
//! repeated denoms, and the merged document must carry a single summed
//! entry for each.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use primitive_types::U256;

use crate::document::Coin;
use crate::error::{GenesisOpsError, Result};

/// Group supply entries by denom and sum their amounts.
///
/// Output order is the order in which each denom was first seen, so feeding
/// entries in a deterministic order yields deterministic output. Amounts
/// are parsed from and re-encoded to decimal strings; `U256` covers the
/// 256-bit range of chain amounts.
///
/// # Errors
///
/// [`GenesisOpsError::InvalidAmount`] if an amount is not a decimal
/// integer, [`GenesisOpsError::AmountOverflow`] if a per-denom sum does not
/// fit in 256 bits.
pub fn merge_supply(entries: &[Coin]) -> Result<Vec<Coin>> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, U256> = HashMap::new();

    for entry in entries {
        // from_dec_str maps the empty string to zero; reject it up front.
        let amount = if entry.amount.is_empty() {
            None
        } else {
            U256::from_dec_str(&entry.amount).ok()
        }
        .ok_or_else(|| GenesisOpsError::InvalidAmount {
            denom: entry.denom.clone(),
            amount: entry.amount.clone(),
        })?;

        match totals.entry(entry.denom.clone()) {
            Entry::Occupied(mut total) => {
                let sum = total.get().checked_add(amount).ok_or_else(|| {
                    GenesisOpsError::AmountOverflow {
                        denom: entry.denom.clone(),
                    }
                })?;
                *total.get_mut() = sum;
            }
            Entry::Vacant(slot) => {
                slot.insert(amount);
                order.push(entry.denom.clone());
            }
        }
    }

    Ok(order
        .into_iter()
        .map(|denom| {
            let amount = totals[&denom].to_string();
            Coin { denom, amount }
        })
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
