use std::fmt;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A block tag, as accepted in place of a block number by most state queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// earliest
    Earliest,
    /// latest
    Latest,
    /// pending
    Pending,
    /// safe
    Safe,
    /// finalized
    Finalized,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockTag::Earliest => "earliest",
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        })
    }
}

/// A block identifier in the EIP-1898 object notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Eip1898BlockSpec {
    /// by block hash
    #[serde(rename_all = "camelCase")]
    Hash {
        /// hash of the block
        block_hash: B256,
        /// whether the block must be part of the canonical chain
        #[serde(skip_serializing_if = "Option::is_none")]
        require_canonical: Option<bool>,
    },
    /// by block number
    #[serde(rename_all = "camelCase")]
    Number {
        /// the block number
        #[serde(with = "alloy_serde::quantity")]
        block_number: u64,
    },
}

impl fmt::Display for Eip1898BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eip1898BlockSpec::Hash { block_hash, .. } => block_hash.fmt(f),
            Eip1898BlockSpec::Number { block_number } => block_number.fmt(f),
        }
    }
}

/// A block specifier: a number, a tag, or an EIP-1898 object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// as a block number
    Number(#[serde(with = "alloy_serde::quantity")] u64),
    /// as a block tag
    Tag(BlockTag),
    /// as an EIP-1898 block specifier
    Eip1898(Eip1898BlockSpec),
}

/// A block specifier for methods that predate EIP-1898 and only accept a
/// number or a tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreEip1898BlockSpec {
    /// as a block number
    Number(#[serde(with = "alloy_serde::quantity")] u64),
    /// as a block tag
    Tag(BlockTag),
}

impl From<PreEip1898BlockSpec> for BlockSpec {
    fn from(value: PreEip1898BlockSpec) -> Self {
        match value {
            PreEip1898BlockSpec::Number(block_number) => BlockSpec::Number(block_number),
            PreEip1898BlockSpec::Tag(tag) => BlockSpec::Tag(tag),
        }
    }
}

macro_rules! impl_block_tags {
    ($type_name:ident) => {
        impl $type_name {
            /// Constructs an instance for the earliest block.
            #[must_use]
            pub fn earliest() -> Self {
                Self::Tag(BlockTag::Earliest)
            }

            /// Constructs an instance for the latest block.
            #[must_use]
            pub fn latest() -> Self {
                Self::Tag(BlockTag::Latest)
            }

            /// Constructs an instance for the pending block.
            #[must_use]
            pub fn pending() -> Self {
                Self::Tag(BlockTag::Pending)
            }

            /// Constructs an instance for the safe block.
            #[must_use]
            pub fn safe() -> Self {
                Self::Tag(BlockTag::Safe)
            }

            /// Constructs an instance for the finalized block.
            #[must_use]
            pub fn finalized() -> Self {
                Self::Tag(BlockTag::Finalized)
            }
        }

    };
}

impl_block_tags!(BlockSpec);
impl_block_tags!(PreEip1898BlockSpec);

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSpec::Number(block_number) => block_number.fmt(f),
            BlockSpec::Tag(tag) => tag.fmt(f),
            BlockSpec::Eip1898(spec) => spec.fmt(f),
        }
    }
}

impl fmt::Display for PreEip1898BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreEip1898BlockSpec::Number(block_number) => block_number.fmt(f),
            PreEip1898BlockSpec::Tag(tag) => tag.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::b256;

    use super::*;

    #[test]
    fn serialize_block_spec_variants() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&BlockSpec::Number(0x10))?, r#""0x10""#);
        assert_eq!(serde_json::to_string(&BlockSpec::latest())?, r#""latest""#);
        assert_eq!(
            serde_json::to_string(&BlockSpec::Eip1898(Eip1898BlockSpec::Number {
                block_number: 1,
            }))?,
            r#"{"blockNumber":"0x1"}"#
        );

        Ok(())
    }

    #[test]
    fn serialize_eip1898_hash_skips_absent_canonical_flag() -> anyhow::Result<()> {
        let spec = BlockSpec::Eip1898(Eip1898BlockSpec::Hash {
            block_hash: b256!("0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933022222"),
            require_canonical: None,
        });

        assert_eq!(
            serde_json::to_string(&spec)?,
            r#"{"blockHash":"0xc008e9f9bb92057dd0035496fbf4fb54f66b4b18b370928e46d6603933022222"}"#
        );

        Ok(())
    }

    #[test]
    fn deserialize_block_spec_from_tag_or_number() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<BlockSpec>(r#""pending""#)?,
            BlockSpec::pending()
        );
        assert_eq!(
            serde_json::from_str::<PreEip1898BlockSpec>(r#""0xa74fde""#)?,
            PreEip1898BlockSpec::Number(0xa74fde)
        );

        Ok(())
    }
}
