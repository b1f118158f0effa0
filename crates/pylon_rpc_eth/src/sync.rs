use serde::{Deserialize, Serialize};

/// Progress report for a node that is synchronizing with the network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    /// block number the node started to synchronize from
    #[serde(with = "alloy_serde::quantity")]
    pub starting_block: u64,
    /// block number the node is currently importing
    #[serde(with = "alloy_serde::quantity")]
    pub current_block: u64,
    /// block number of the highest block header received from peers
    #[serde(with = "alloy_serde::quantity")]
    pub highest_block: u64,
    /// number of state entries processed so far
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub pulled_states: Option<u64>,
    /// number of known state entries left to pull
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "alloy_serde::quantity::opt"
    )]
    pub known_states: Option<u64>,
}

/// Result of `eth_syncing`: either a progress report or `false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncStatus {
    /// the node is synchronizing
    Syncing(SyncProgress),
    /// the node is not synchronizing; the wire value is `false`
    NotSyncing(bool),
}

impl SyncStatus {
    /// Whether the node reported an ongoing synchronization.
    pub fn is_syncing(&self) -> bool {
        matches!(self, SyncStatus::Syncing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_not_syncing() -> anyhow::Result<()> {
        let status: SyncStatus = serde_json::from_str("false")?;
        assert!(!status.is_syncing());

        Ok(())
    }

    #[test]
    fn deserialize_progress_object() -> anyhow::Result<()> {
        let status: SyncStatus = serde_json::from_str(
            r#"{"startingBlock":"0x384","currentBlock":"0x386","highestBlock":"0x454"}"#,
        )?;

        assert_eq!(
            status,
            SyncStatus::Syncing(SyncProgress {
                starting_block: 0x384,
                current_block: 0x386,
                highest_block: 0x454,
                pulled_states: None,
                known_states: None,
            })
        );

        Ok(())
    }
}
