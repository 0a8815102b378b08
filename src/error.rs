use crate::graph::NodeId;

/// Failures reported before any work is done.
///
/// Out-of-range node ids are not reported here.
/// They are preconditions and may panic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a node visitor and a conditional node visitor cannot both be specified")]
    ConflictingNodeVisitors,
    #[error("an arc visitor and a conditional arc visitor cannot both be specified")]
    ConflictingArcVisitors,
    #[error("directed graph: arc {from:?} -> {to:?} has no reciprocal")]
    NotUndirected { from: NodeId, to: NodeId },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
