use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::tag::{AssetType, Tag};

/// A pending claim against an asset's balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Address that called the claim function.
    pub from: String,
    /// Quantity of the asset to be claimed.
    pub qty: u64,
    /// Address the asset is to be transferred to.
    pub to: String,
    /// Transaction that invoked the claim.
    #[serde(rename = "txID")]
    pub tx_id: String,
}

/// The initial ownership state of a tokenized asset.
///
/// Serialized verbatim into the `Init-State` tag and never mutated here;
/// balances are non-negative by construction.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradableAssetInitState {
    /// Ticker symbol, e.g. `ATOMIC`.
    #[builder(into)]
    pub ticker: String,
    /// Display name of the asset.
    #[builder(into)]
    pub name: String,
    /// Address to balance mapping. Key order is irrelevant, keys unique.
    #[builder(default)]
    pub balances: BTreeMap<String, u64>,
    /// Pending claims, if any.
    #[builder(default)]
    pub claimable: Vec<ClaimRecord>,
    /// Contract-specific extra state, passed through untouched.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Discoverability metadata required on every published asset.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverabilityTags {
    /// Kind of asset, from the closed enumeration.
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[builder(into)]
    pub title: String,
    #[builder(into)]
    pub description: String,
    /// Free-form topics, emitted one tag each in the given order.
    #[builder(default)]
    pub topics: Vec<String>,
}

/// License field bag per the universal data license specification. Treated
/// as opaque: fields present are flattened into tags, nothing more.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTags {
    /// Transaction id of the license document.
    #[builder(into)]
    pub license: String,
    #[builder(into)]
    pub access: Option<String>,
    #[builder(into)]
    pub access_fee: Option<String>,
    #[builder(into)]
    pub derivation: Option<String>,
    #[builder(into)]
    pub commercial_use: Option<String>,
    #[builder(into)]
    pub license_fee: Option<String>,
    #[builder(into)]
    pub currency: Option<String>,
    #[builder(into)]
    pub expires: Option<String>,
    #[builder(into)]
    pub payment_address: Option<String>,
    #[builder(into)]
    pub payment_mode: Option<String>,
}

/// Source/template identifiers for the asset's contract.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractIdentifierTags {
    /// Transaction id of the contract source.
    #[builder(into)]
    pub contract_src: String,
    /// Evaluation manifest; the standard manifest is used when absent.
    #[builder(into)]
    pub contract_manifest: Option<String>,
}

/// Collection pointers per the collection specification.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSpecificTags {
    /// Collection name.
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub collection_type: Option<String>,
    /// Thumbnail transaction id (recommended 300x300).
    #[builder(into)]
    pub thumbnail: Option<String>,
    /// Banner transaction id (recommended 1600x900).
    #[builder(into)]
    pub banner: Option<String>,
    #[builder(into)]
    pub collection_code: Option<String>,
}

/// Whether a collection opts into the third-party stamping mechanism.
/// Only the stampable variant contributes tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Stampable {
    Stampable {
        owner: String,
        collection_name: String,
        ticker: String,
    },
    #[default]
    NotStampable,
}

/// Options for creating a single tradable asset.
#[derive(Builder, Debug, Clone)]
pub struct CreateTradableAssetOpts {
    /// Initial ownership state, serialized into `Init-State`.
    pub initial_state: TradableAssetInitState,
    pub discoverability: DiscoverabilityTags,
    pub license: Option<LicenseTags>,
    pub contract_identifier: Option<ContractIdentifierTags>,
    /// Index the asset with the universal content marketplace. Defaults to
    /// true; the tag is omitted entirely when explicitly false.
    #[builder(default = true)]
    pub index_with_ucm: bool,
    /// Caller-supplied tags appended verbatim, unvalidated, at the end.
    #[builder(default)]
    pub additional_tags: Vec<Tag>,
}

/// Options for creating a collection out of already-published asset ids.
///
/// To build a collection from a list of files, publish each file with
/// `create_atomic_asset` first and hand the resulting ids to
/// `create_collection`.
#[derive(Builder, Debug, Clone)]
pub struct CreateCollectionOpts {
    /// The atomic assets included in the collection.
    pub asset_ids: Vec<String>,
    pub collection: CollectionSpecificTags,
    /// Discoverability metadata. The `Type` tag is always forced to
    /// `Document` for collections, whatever `asset_type` says here.
    pub discoverability: DiscoverabilityTags,
    #[builder(default)]
    pub stamp: Stampable,
    #[builder(default = true)]
    pub index_with_ucm: bool,
    #[builder(default)]
    pub additional_tags: Vec<Tag>,
}

/// An in-memory file payload with its media type. Reading files off disk is
/// the caller's business; the core only needs bytes and a content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl AssetFile {
    pub fn new(data: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        AssetFile {
            data: data.into(),
            content_type: content_type.into(),
        }
    }
}

/// The payload handed to whichever backend executes the network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPayload {
    /// Raw bytes, e.g. a serialized manifest.
    Data(Vec<u8>),
    /// A file with a known media type.
    File(AssetFile),
}

impl UploadPayload {
    pub fn len(&self) -> usize {
        match self {
            UploadPayload::Data(data) => data.len(),
            UploadPayload::File(file) => file.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fully-built payload plus the tags to attach to it.
#[derive(Debug, Clone)]
pub struct UploadDataOpts {
    pub payload: UploadPayload,
    pub tags: Vec<Tag>,
}
