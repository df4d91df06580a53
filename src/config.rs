use bon::Builder;

use crate::concepts::SigningKey;
use crate::errors::{ConfigurationError, Error, Result};

/// The caller-held configuration every operation runs against.
///
/// Immutable: operations only read it, so one configuration can serve
/// concurrent calls. Clients may be absent individually; each operation
/// resolves the backend it needs per call and fails with a
/// [`ConfigurationError`] when the combination is incomplete.
#[derive(Builder, Debug)]
pub struct AtomicToolkit<B, C, R> {
    /// Pre-funded bundling-service client. When present, it is always the
    /// selected upload backend.
    pub bundler: Option<B>,
    /// Direct-chain client, used together with `key` when no bundler is
    /// configured.
    pub chain: Option<C>,
    /// Wallet signing key for the direct-chain path.
    pub key: Option<SigningKey>,
    /// Contract-deployment client for `create_atomic_asset`.
    pub registrar: Option<R>,
}

/// The active upload backend, resolved from the configuration. Selection is
/// deterministic: a configured bundler always wins; there is no fallback
/// from one backend to the other on failure.
#[derive(Debug)]
pub enum Backend<'a, B, C> {
    Bundler(&'a B),
    DirectChain { client: &'a C, key: &'a SigningKey },
}

impl<B, C, R> AtomicToolkit<B, C, R> {
    /// Resolves the upload backend for this call.
    pub fn backend(&self) -> Result<Backend<'_, B, C>> {
        if let Some(bundler) = &self.bundler {
            return Ok(Backend::Bundler(bundler));
        }
        match (&self.chain, &self.key) {
            (Some(client), Some(key)) => Ok(Backend::DirectChain { client, key }),
            _ => Err(ConfigurationError::MissingDirectChainBackend.into()),
        }
    }

    pub(crate) fn require_bundler(&self) -> Result<&B> {
        self.bundler
            .as_ref()
            .ok_or(Error::Configuration(ConfigurationError::MissingBundler))
    }
}
