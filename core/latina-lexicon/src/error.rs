use latina_protocol::{ComparisonDegree, EntityId};
use thiserror::Error;

/// A mutator rejected its input. The entity is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("root word must not be empty")]
    EmptyRoot,

    #[error("the {0} degree is not allowed for this adjective")]
    DegreeNotAllowed(ComparisonDegree),

    #[error("identifier already initialized to {0}")]
    IdAlreadyInitialized(EntityId),
}
