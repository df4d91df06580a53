use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;

/// Upload acknowledgment from the bundling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerReceipt {
    /// Content identifier of the uploaded item.
    pub id: String,
    /// Millisecond timestamp at which the bundler accepted the item.
    pub timestamp: u64,
    pub version: String,
    /// Bundler's signature over the receipt.
    pub signature: String,
    /// Block height by which the item is guaranteed to be settled.
    pub deadline_height: u64,
}

/// Signed-transaction record from the direct-chain path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainTransaction {
    /// Transaction id, which is also the content identifier.
    pub id: String,
    /// Owner key the transaction was signed with.
    pub owner: String,
    pub data_size: u64,
    /// Fee paid, in base units.
    pub reward: TokenAmount,
    pub signature: String,
}

/// The normalized result of `upload_data`, tagged by the backend that
/// executed it. Callers match on the variant, never sniff shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadReceipt {
    Bundler(BundlerReceipt),
    DirectChain(ChainTransaction),
}

impl UploadReceipt {
    /// Content identifier, whichever backend produced it.
    pub fn id(&self) -> &str {
        match self {
            UploadReceipt::Bundler(receipt) => &receipt.id,
            UploadReceipt::DirectChain(tx) => &tx.id,
        }
    }
}

/// Handle to a registered on-chain contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeploy {
    pub contract_tx_id: String,
    pub src_tx_id: Option<String>,
}
