//! Deterministic construction of protocol-compliant tag sets.
//!
//! Pure functions: no network, no I/O. Emission order is part of the
//! contract, since downstream indexers read tags positionally as well as by
//! name: every group goes out in the exact sequence documented on each
//! builder, and validation failures happen before anything is uploaded.

use serde_json::json;

use crate::errors::{Result, ValidationError};
use crate::types::{
    AssetFile, CollectionSpecificTags, ContractIdentifierTags, CreateCollectionOpts,
    CreateTradableAssetOpts, DiscoverabilityTags, LicenseTags, Stampable, Tag,
    TradableAssetInitState, names,
};

/// `App-Name` value marking a contract-bearing upload.
pub const SMARTWEAVE_CONTRACT: &str = "SmartWeaveContract";
/// Contract protocol version emitted alongside [`SMARTWEAVE_CONTRACT`].
pub const SMARTWEAVE_VERSION: &str = "0.3.0";
/// `Indexed-By` value for the universal content marketplace.
pub const UCM_INDEXER: &str = "ucm";
/// `Data-Protocol` value on collection manifests.
pub const COLLECTION_PROTOCOL: &str = "Collection";
/// `Type` value on collection manifests. Capitalized per the collection
/// specification, unlike the lowercase single-asset enumeration.
pub const COLLECTION_DOCUMENT_TYPE: &str = "Document";
/// Source transaction of the stock atomic-asset contract, used for the
/// stamping contract group on stampable collections.
pub const ATOMIC_ASSET_SRC: &str = "Of9pi--Gj7hCTawhgxOwbuWnFI1h24TTgO5pw8ENJNQ";
/// Evaluation manifest applied when the caller does not supply one.
pub const DEFAULT_CONTRACT_MANIFEST: &str = r#"{"evaluationOptions":{"sourceType":"redstone-sequencer","allowBigInt":true,"internalWrites":true,"unsafeClient":"skip","useConstructor":true}}"#;

/// Builds the tag set for a single tradable asset.
///
/// Order: `Content-Type`; `Type`/`Title`/`Description`; one `Topic` per
/// topic in caller order; the license group if present; the contract
/// identifier group if present; `Indexed-By: ucm` unless indexing was
/// explicitly turned off; the caller's additional tags verbatim.
pub fn build_tradable_asset_tags(
    file: &AssetFile,
    opts: &CreateTradableAssetOpts,
) -> Result<Vec<Tag>> {
    let mut tags = vec![Tag::new(names::CONTENT_TYPE, file.content_type.clone())];
    push_discoverability_tags(&mut tags, &opts.discoverability, None)?;
    if let Some(license) = &opts.license {
        push_license_tags(&mut tags, license);
    }
    if let Some(identifier) = &opts.contract_identifier {
        push_contract_identifier_tags(&mut tags, identifier, &opts.initial_state)?;
    }
    if opts.index_with_ucm {
        tags.push(Tag::new(names::INDEXED_BY, UCM_INDEXER));
    }
    tags.extend(opts.additional_tags.iter().cloned());
    Ok(tags)
}

/// Builds the tag set for a collection manifest.
///
/// Collections are always published as documents: the `Type` tag is forced
/// to `Document` regardless of the caller's `asset_type`. Order:
/// `Content-Type: application/json`; discoverability; the collection group
/// (`Data-Protocol` first); the stamp contract group for the stampable
/// variant; `Indexed-By: ucm` unless turned off; additional tags verbatim.
pub fn build_collection_tags(opts: &CreateCollectionOpts) -> Result<Vec<Tag>> {
    let mut tags = vec![Tag::new(names::CONTENT_TYPE, "application/json")];
    push_discoverability_tags(&mut tags, &opts.discoverability, Some(COLLECTION_DOCUMENT_TYPE))?;
    push_collection_tags(&mut tags, &opts.collection);
    if let Stampable::Stampable {
        owner,
        collection_name,
        ticker,
    } = &opts.stamp
    {
        push_stamp_tags(&mut tags, owner, collection_name, ticker)?;
    }
    if opts.index_with_ucm {
        tags.push(Tag::new(names::INDEXED_BY, UCM_INDEXER));
    }
    tags.extend(opts.additional_tags.iter().cloned());
    Ok(tags)
}

fn push_discoverability_tags(
    tags: &mut Vec<Tag>,
    discoverability: &DiscoverabilityTags,
    forced_type: Option<&str>,
) -> Result<()> {
    if discoverability.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle.into());
    }
    if discoverability.description.trim().is_empty() {
        return Err(ValidationError::MissingDescription.into());
    }
    let asset_type = forced_type.unwrap_or(discoverability.asset_type.as_str());
    tags.push(Tag::new(names::TYPE, asset_type));
    tags.push(Tag::new(names::TITLE, discoverability.title.clone()));
    tags.push(Tag::new(
        names::DESCRIPTION,
        discoverability.description.clone(),
    ));
    for topic in &discoverability.topics {
        tags.push(Tag::new(names::TOPIC, topic.clone()));
    }
    Ok(())
}

fn push_license_tags(tags: &mut Vec<Tag>, license: &LicenseTags) {
    tags.push(Tag::new(names::LICENSE, license.license.clone()));
    let optional = [
        (names::ACCESS, &license.access),
        (names::ACCESS_FEE, &license.access_fee),
        (names::DERIVATION, &license.derivation),
        (names::COMMERCIAL_USE, &license.commercial_use),
        (names::LICENSE_FEE, &license.license_fee),
        (names::CURRENCY, &license.currency),
        (names::EXPIRES, &license.expires),
        (names::PAYMENT_ADDRESS, &license.payment_address),
        (names::PAYMENT_MODE, &license.payment_mode),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            tags.push(Tag::new(name, value.clone()));
        }
    }
}

fn push_contract_identifier_tags(
    tags: &mut Vec<Tag>,
    identifier: &ContractIdentifierTags,
    initial_state: &TradableAssetInitState,
) -> Result<()> {
    tags.push(Tag::new(names::APP_NAME, SMARTWEAVE_CONTRACT));
    tags.push(Tag::new(names::APP_VERSION, SMARTWEAVE_VERSION));
    tags.push(Tag::new(names::CONTRACT_SRC, identifier.contract_src.clone()));
    tags.push(Tag::new(
        names::CONTRACT_MANIFEST,
        identifier
            .contract_manifest
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTRACT_MANIFEST.to_string()),
    ));
    tags.push(Tag::new(
        names::INIT_STATE,
        serde_json::to_string(initial_state)?,
    ));
    Ok(())
}

fn push_collection_tags(tags: &mut Vec<Tag>, collection: &CollectionSpecificTags) {
    tags.push(Tag::new(names::DATA_PROTOCOL, COLLECTION_PROTOCOL));
    tags.push(Tag::new(names::NAME, collection.name.clone()));
    let optional = [
        (names::COLLECTION_TYPE, &collection.collection_type),
        (names::THUMBNAIL, &collection.thumbnail),
        (names::BANNER, &collection.banner),
        (names::COLLECTION_CODE, &collection.collection_code),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            tags.push(Tag::new(name, value.clone()));
        }
    }
}

fn push_stamp_tags(
    tags: &mut Vec<Tag>,
    owner: &str,
    collection_name: &str,
    ticker: &str,
) -> Result<()> {
    let mut balances = serde_json::Map::new();
    balances.insert(owner.to_string(), json!(1u64));
    let init_state = json!({
        "ticker": ticker,
        "name": collection_name,
        "claimable": [],
        "balances": balances,
    });
    tags.push(Tag::new(names::APP_NAME, SMARTWEAVE_CONTRACT));
    tags.push(Tag::new(names::APP_VERSION, SMARTWEAVE_VERSION));
    tags.push(Tag::new(names::CONTRACT_SRC, ATOMIC_ASSET_SRC));
    tags.push(Tag::new(
        names::INIT_STATE,
        serde_json::to_string(&init_state)?,
    ));
    Ok(())
}
