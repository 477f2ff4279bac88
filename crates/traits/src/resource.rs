//! ResourceProvider trait for the file-retrieval collaborator.
//!
//! Image content records carry an opaque `identity` key; resolving that
//! key to bytes is delegated here so the engine never performs I/O.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for resource retrieval operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to retrieve resource '{identity}': {message}")]
    RetrievalFailed { identity: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A capability for resolving an opaque identity to a byte stream.
///
/// Failures are values; the renderer treats a failed lookup as a degraded
/// render (caption without picture), never a panic.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Resolve an identity to its bytes.
    fn load(&self, identity: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check whether an identity can be resolved.
    fn exists(&self, identity: &str) -> bool;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources must be registered before rendering. Works in any
/// environment; the test suite uses it as the lookup backing store.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    store: std::sync::RwLock<std::collections::HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under an identity.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::RetrievalFailed` if the internal lock is
    /// poisoned.
    pub fn add(&self, identity: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let identity = identity.into();
        let mut store = self
            .store
            .write()
            .map_err(|_| ResourceError::RetrievalFailed {
                identity: identity.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        store.insert(identity, Arc::new(data));
        Ok(())
    }

    /// Get the number of registered resources.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.store.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, identity: &str) -> Result<SharedResourceData, ResourceError> {
        let store = self
            .store
            .read()
            .map_err(|_| ResourceError::RetrievalFailed {
                identity: identity.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        store
            .get(identity)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(identity.to_string()))
    }

    fn exists(&self, identity: &str) -> bool {
        self.store
            .read()
            .map(|s| s.contains_key(identity))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
