//! End-to-end peer extraction runs.

#[cfg(test)]
mod tests {
    use genesis_ops::{extract_peers, GenesisOpsError};
    use serde_json::json;
    use std::fs;

    use crate::integration::fixtures::{target_genesis, write_json};

    #[test]
    fn extracts_every_memo_in_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let genesis = json!({
            "app_state": { "genutil": { "gen_txs": [
                { "body": { "memo": "id-0@10.0.0.10:26656" } },
                { "body": { "memo": "id-1@10.0.0.11:26656" } },
                { "body": { "memo": "id-2@10.0.0.12:26656" } }
            ] } }
        });
        let path = write_json(dir.path(), "genesis.json", &genesis);

        let peers = extract_peers(&path).unwrap();

        assert_eq!(peers.len(), 3);
        assert_eq!(
            peers.join(","),
            "id-0@10.0.0.10:26656,id-1@10.0.0.11:26656,id-2@10.0.0.12:26656"
        );
    }

    #[test]
    fn works_on_a_full_genesis_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(dir.path(), "genesis.json", &target_genesis());

        assert_eq!(extract_peers(&path).unwrap(), ["id-0@10.0.0.10:26656"]);
    }

    #[test]
    fn missing_file_fails_without_a_peer_list() {
        let dir = tempfile::tempdir().unwrap();

        let err = extract_peers(&dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, GenesisOpsError::FileNotFound { .. }));
    }

    #[test]
    fn invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genesis.json");
        fs::write(&path, "{ \"app_state\": ").unwrap();

        let err = extract_peers(&path).unwrap_err();

        assert!(matches!(err, GenesisOpsError::InvalidFormat { .. }));
    }

    #[test]
    fn document_without_gen_txs_fails_with_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_json(
            dir.path(),
            "genesis.json",
            &json!({ "app_state": { "genutil": {} } }),
        );

        let err = extract_peers(&path).unwrap_err();

        assert!(matches!(
            err,
            GenesisOpsError::MissingField { ref field, .. } if field == "app_state.genutil.gen_txs"
        ));
    }
}
