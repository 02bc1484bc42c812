use thiserror::Error;

/// Errors surfaced by the discovery core.
///
/// There is no fatal class here: a failed zone-group query is retried
/// internally, a name lookup that times out returns `None`, and an
/// early read simply sees a partial snapshot.
#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("Failed to start network search: {0}")]
    SearchFailed(String),

    #[error("Topology query error: {0}")]
    Topology(#[from] TopologyError),
}

/// A zone-group-state query failed.
///
/// Deliberately opaque: the refresher only needs to tell failure from
/// success, and retries until its deadline regardless of the cause.
#[derive(Error, Debug)]
#[error("Zone group state query failed: {0}")]
pub struct TopologyError(pub String);

impl TopologyError {
    /// Create a new TopologyError with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
