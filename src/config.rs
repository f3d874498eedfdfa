//! Graph construction options.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options applied when a graph is created.
///
/// Deserializable so embedding applications can keep it in their own
/// settings files; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Node slots reserved up front.
    pub node_capacity: usize,
    /// Edge slots reserved up front.
    pub edge_capacity: usize,
    /// When `true`, node-level removal of an edge that is not the chain head
    /// reports [`GraphError::NotChainHead`](crate::GraphError::NotChainHead).
    /// When `false` it is a silent no-op.
    pub strict_removal: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_capacity: 0,
            edge_capacity: 0,
            strict_removal: true,
        }
    }
}

impl GraphConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`GraphError::Config`](crate::GraphError::Config) on malformed
    /// input or unknown fields.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sets the node capacity hint.
    #[must_use]
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Sets the edge capacity hint.
    #[must_use]
    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    /// Chooses between reported and silent non-head removal.
    #[must_use]
    pub fn with_strict_removal(mut self, strict: bool) -> Self {
        self.strict_removal = strict;
        self
    }
}
