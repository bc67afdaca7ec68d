use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentBuildError {
    #[error(
        "Unable to determine whether to build a query or a mutation. Call \
        `set_operation_kind()` first."
    )]
    AmbiguousOperationKind,

    #[error("A mutation document requires a mutation name")]
    MissingMutationName,

    #[error("A query document requires a target shape")]
    MissingTargetShape,
}
