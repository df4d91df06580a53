//! Cost estimation without performing the upload.

use serde::{Deserialize, Serialize};

use crate::concepts::{BundlerClient, ChainClient};
use crate::config::AtomicToolkit;
use crate::errors::{ConfigurationError, Error, Result};
use crate::types::{Amount, TokenAmount, TokenInfo};

/// The answer to "what will this upload cost, and do I have enough funds".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCost {
    /// Settlement token of the active backend.
    pub token: String,
    /// Quoted price for the payload size.
    pub cost: Amount,
    /// Funds currently available on the active backend.
    pub balance: Amount,
    /// Shortfall still to be funded: `max(cost - balance, 0)`, never
    /// reported negative.
    pub additional: Amount,
}

impl<B, C, R> AtomicToolkit<B, C, R>
where
    B: BundlerClient,
    C: ChainClient,
{
    /// Computes token identity, balance, price, and funding shortfall for
    /// uploading `size` bytes on the active backend.
    ///
    /// The bundling path quotes against the prepaid balance. The direct
    /// path requires a signing key (even when no chain client is
    /// configured) and quotes against the wallet's on-chain balance.
    pub async fn get_upload_cost(&self, size: u64) -> Result<UploadCost> {
        if let Some(bundler) = &self.bundler {
            bundler.ready().await.map_err(Error::bundler)?;
            let balance = bundler.loaded_balance().await.map_err(Error::bundler)?;
            let cost = bundler.price(size).await.map_err(Error::bundler)?;
            let token = bundler.token().clone();
            return Ok(Self::breakdown(token, cost, balance));
        }

        let key = self
            .key
            .as_ref()
            .ok_or(Error::Configuration(ConfigurationError::MissingKey))?;
        let chain = self.chain.as_ref().ok_or(Error::Configuration(
            ConfigurationError::MissingDirectChainBackend,
        ))?;
        let address = chain.wallet_address(key).await.map_err(Error::chain)?;
        let balance = chain.wallet_balance(&address).await.map_err(Error::chain)?;
        let cost = chain.price(size, &address).await.map_err(Error::chain)?;
        Ok(Self::breakdown(TokenInfo::native(), cost, balance))
    }

    fn breakdown(token: TokenInfo, cost: TokenAmount, balance: TokenAmount) -> UploadCost {
        let additional = cost.saturating_sub(&balance);
        UploadCost {
            cost: Amount::from_atomic(cost, token.decimals),
            balance: Amount::from_atomic(balance, token.decimals),
            additional: Amount::from_atomic(additional, token.decimals),
            token: token.name,
        }
    }
}
