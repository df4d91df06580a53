//! Backend seams consumed by the toolkit.
//!
//! The bundling service, the chain RPC, and the contract registrar are
//! external services; the toolkit only ever talks to them through these
//! traits and never retries or reorders their calls.

use crate::types::{
    AssetFile, BundlerReceipt, ChainTransaction, ContractDeploy, Tag, TokenAmount, TokenInfo,
    UploadPayload,
};
use crate::node::BundlerNode;

/// A wallet signing key, held as an opaque JWK. The toolkit never inspects
/// or mutates it, only hands it to the chain client.
#[derive(Clone)]
pub struct SigningKey(serde_json::Value);

impl SigningKey {
    pub fn from_jwk(jwk: serde_json::Value) -> Self {
        SigningKey(jwk)
    }

    pub fn as_jwk(&self) -> &serde_json::Value {
        &self.0
    }
}

impl std::fmt::Debug for SigningKey {
    // Key material stays out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

/// Pre-funded bundling-service backend.
pub trait BundlerClient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The configured API endpoint, as given.
    fn endpoint(&self) -> &str;

    /// Settlement currency the prepaid balance is denominated in.
    fn token(&self) -> &TokenInfo;

    /// Resolves once the client is ready to accept uploads.
    fn ready(&self) -> impl Future<Output = Result<(), Self::Error>>;

    /// Currently loaded prepaid balance, in base units.
    fn loaded_balance(&self) -> impl Future<Output = Result<TokenAmount, Self::Error>>;

    /// Quoted price for uploading `size` bytes, in base units.
    fn price(&self, size: u64) -> impl Future<Output = Result<TokenAmount, Self::Error>>;

    /// Uploads raw bytes with the given tags attached.
    fn upload(
        &self,
        data: &[u8],
        tags: &[Tag],
    ) -> impl Future<Output = Result<BundlerReceipt, Self::Error>>;

    /// Uploads a file with the given tags attached.
    fn upload_file(
        &self,
        file: &AssetFile,
        tags: &[Tag],
    ) -> impl Future<Output = Result<BundlerReceipt, Self::Error>>;
}

/// Wallet-funded direct-chain backend.
pub trait ChainClient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Address derived from the signing key.
    fn wallet_address(
        &self,
        key: &SigningKey,
    ) -> impl Future<Output = Result<String, Self::Error>>;

    /// Current on-chain balance for `address`, in base units.
    fn wallet_balance(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<TokenAmount, Self::Error>>;

    /// Network-quoted transaction price for `size` bytes at `target`.
    fn price(
        &self,
        size: u64,
        target: &str,
    ) -> impl Future<Output = Result<TokenAmount, Self::Error>>;

    /// Signs and submits a transaction carrying the payload and tags.
    fn submit(
        &self,
        payload: &UploadPayload,
        tags: &[Tag],
        key: &SigningKey,
    ) -> impl Future<Output = Result<ChainTransaction, Self::Error>>;
}

/// Contract-deployment service used to register uploaded content.
pub trait ContractRegistrar {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether the instance carries the deployment capability.
    fn supports_deploy(&self) -> bool;

    /// Registers the uploaded content identifier as a contract served from
    /// the given bundling node.
    fn register(
        &self,
        id: &str,
        node: BundlerNode,
    ) -> impl Future<Output = Result<ContractDeploy, Self::Error>>;
}
