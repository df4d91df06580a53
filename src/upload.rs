//! Upload routing and the two public creation flows.

use serde::Serialize;

use crate::builder::{COLLECTION_PROTOCOL, build_collection_tags, build_tradable_asset_tags};
use crate::concepts::{BundlerClient, ChainClient, ContractRegistrar};
use crate::config::{AtomicToolkit, Backend};
use crate::errors::{ConfigurationError, Error, Result};
use crate::types::{
    AssetFile, BundlerReceipt, ContractDeploy, CreateCollectionOpts, CreateTradableAssetOpts,
    UploadDataOpts, UploadPayload, UploadReceipt,
};

/// Minimal manifest published as a collection's payload.
#[derive(Debug, Serialize)]
struct CollectionManifest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    items: &'a [String],
}

impl<B, C, R> AtomicToolkit<B, C, R>
where
    B: BundlerClient,
    C: ChainClient,
{
    /// Uploads a payload with pre-built tags on the active backend.
    ///
    /// A configured bundler always handles the upload; otherwise both a
    /// chain client and a signing key are required, and the call fails
    /// with a [`ConfigurationError`] before any network activity if either
    /// is missing. Underlying network failures are surfaced with their
    /// original cause intact.
    pub async fn upload_data(&self, opts: &UploadDataOpts) -> Result<UploadReceipt> {
        match self.backend()? {
            Backend::Bundler(bundler) => {
                let receipt = match &opts.payload {
                    UploadPayload::Data(data) => bundler.upload(data, &opts.tags).await,
                    UploadPayload::File(file) => bundler.upload_file(file, &opts.tags).await,
                }
                .map_err(Error::bundler)?;
                #[cfg(feature = "tracing")]
                tracing::debug!("Bundler accepted upload: id='{}'", receipt.id);
                Ok(UploadReceipt::Bundler(receipt))
            }
            Backend::DirectChain { client, key } => {
                let tx = client
                    .submit(&opts.payload, &opts.tags, key)
                    .await
                    .map_err(Error::chain)?;
                #[cfg(feature = "tracing")]
                tracing::debug!("Chain accepted transaction: id='{}'", tx.id);
                Ok(UploadReceipt::DirectChain(tx))
            }
        }
    }

    /// Publishes a collection manifest listing already-uploaded asset ids.
    ///
    /// Bundler-only. No deduplication is performed: publishing the same
    /// asset ids twice yields two independently addressed manifests.
    pub async fn create_collection(&self, opts: &CreateCollectionOpts) -> Result<BundlerReceipt> {
        let bundler = self.require_bundler()?;
        let tags = build_collection_tags(opts)?;
        let manifest = serde_json::to_vec(&CollectionManifest {
            kind: COLLECTION_PROTOCOL,
            items: &opts.asset_ids,
        })?;
        bundler.ready().await.map_err(Error::bundler)?;
        let receipt = bundler
            .upload(&manifest, &tags)
            .await
            .map_err(Error::bundler)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Collection manifest uploaded: id='{}', items={}",
            receipt.id,
            opts.asset_ids.len()
        );
        Ok(receipt)
    }
}

impl<B, C, R> AtomicToolkit<B, C, R>
where
    B: BundlerClient,
    C: ChainClient,
    R: ContractRegistrar,
{
    /// Uploads a file as a tradable asset and registers it as a contract.
    ///
    /// Bundler-only. Tag construction and node resolution happen before the
    /// upload, the upload completes before registration; the three phases
    /// are strictly sequential. Requires a registrar with the deployment
    /// capability.
    pub async fn create_atomic_asset(
        &self,
        file: &AssetFile,
        opts: &CreateTradableAssetOpts,
    ) -> Result<ContractDeploy> {
        let registrar = self
            .registrar
            .as_ref()
            .ok_or(Error::Configuration(ConfigurationError::MissingRegistrar))?;
        if !registrar.supports_deploy() {
            return Err(ConfigurationError::DeployUnsupported.into());
        }
        let bundler = self.require_bundler()?;
        let tags = build_tradable_asset_tags(file, opts)?;
        let node = self.get_node()?;
        bundler.ready().await.map_err(Error::bundler)?;
        let receipt = bundler
            .upload_file(file, &tags)
            .await
            .map_err(Error::bundler)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Registering asset contract: id='{}', node='{}'",
            receipt.id,
            node
        );
        let deploy = registrar
            .register(&receipt.id, node)
            .await
            .map_err(Error::registrar)?;
        Ok(deploy)
    }
}
