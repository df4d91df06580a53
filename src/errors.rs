pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A tag field that is malformed or missing. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("description is required")]
    MissingDescription,

    #[error("unknown asset type: {0}")]
    UnknownAssetType(String),
}

/// The caller's configuration is incomplete or contradictory for the
/// requested operation. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no key provided")]
    MissingKey,

    #[error("chain client and key must be defined")]
    MissingDirectChainBackend,

    #[error("bundler client is not configured")]
    MissingBundler,

    #[error("contract registrar is not configured")]
    MissingRegistrar,

    #[error("contract registrar does not support deployments")]
    DeployUnsupported,

    #[error("bundler endpoint is not a valid URL: {0}")]
    InvalidEndpoint(String),

    #[error("only node1 and node2 are supported, got '{0}'")]
    UnsupportedNode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("bundler request failed: {0}")]
    Bundler(#[source] BoxError),

    #[error("chain request failed: {0}")]
    Chain(#[source] BoxError),

    #[error("contract registration failed: {0}")]
    Registrar(#[source] BoxError),
}

impl Error {
    pub fn bundler(err: impl Into<BoxError>) -> Self {
        Error::Bundler(err.into())
    }

    pub fn chain(err: impl Into<BoxError>) -> Self {
        Error::Chain(err.into())
    }

    pub fn registrar(err: impl Into<BoxError>) -> Self {
        Error::Registrar(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
