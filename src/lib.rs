//! Client toolkit for publishing atomic assets (self-contained tokenized
//! media objects) and collections to a content-addressed permanent-storage
//! network, with optional registration as on-chain contracts.
//!
//! The toolkit assembles protocol-compliant tag sets, routes uploads to one
//! of two mutually exclusive backends (a pre-funded bundling service, or a
//! wallet-funded direct-chain path), estimates storage cost, and resolves
//! the serving bundling node. Backends are consumed through the traits in
//! [`concepts`]; the toolkit holds no state beyond the caller's
//! configuration and performs no retries of its own.

pub mod builder;
pub mod concepts;
pub mod config;
pub mod cost;
pub mod errors;
pub mod node;
pub mod types;
pub mod upload;

pub use builder::{build_collection_tags, build_tradable_asset_tags};
pub use concepts::{BundlerClient, ChainClient, ContractRegistrar, SigningKey};
pub use config::{AtomicToolkit, Backend};
pub use cost::UploadCost;
pub use errors::{ConfigurationError, Error, Result, ValidationError};
pub use node::BundlerNode;
