//! Resolution of the physical bundling node behind the configured endpoint.

use std::fmt::Display;

use url::Url;

use crate::concepts::BundlerClient;
use crate::config::AtomicToolkit;
use crate::errors::{ConfigurationError, Result};

/// The production bundling nodes contracts may be registered against.
/// Anything else, the development node included, is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundlerNode {
    Node1,
    Node2,
}

impl BundlerNode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundlerNode::Node1 => "node1",
            BundlerNode::Node2 => "node2",
        }
    }
}

impl Display for BundlerNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<B, C, R> AtomicToolkit<B, C, R>
where
    B: BundlerClient,
{
    /// Identifies which bundling node the configured client points at, from
    /// the first label of the endpoint's host.
    ///
    /// Fails with a [`ConfigurationError`] when no bundler is configured,
    /// when the endpoint is not a parseable URL, or when the resolved label
    /// is not one of the two production nodes.
    pub fn get_node(&self) -> Result<BundlerNode> {
        let endpoint = self.require_bundler()?.endpoint();
        let url = Url::parse(endpoint)
            .map_err(|_| ConfigurationError::InvalidEndpoint(endpoint.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| ConfigurationError::InvalidEndpoint(endpoint.to_string()))?;
        let label = host.split('.').next().unwrap_or_default();
        match label {
            "node1" => Ok(BundlerNode::Node1),
            "node2" => Ok(BundlerNode::Node2),
            other => Err(ConfigurationError::UnsupportedNode(other.to_string()).into()),
        }
    }
}
