use crate::NameError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    #[error("unknown exercise \"{0}\"")]
    UnknownExercise(String),
    #[error("workout sequence already active")]
    SequenceAlreadyActive,
}

/// A best-effort resource of the host environment is missing.
///
/// Never fatal: the sequencer logs the error and carries on without the resource.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceUnavailable {
    #[error("camera unavailable: {0}")]
    Camera(String),
    #[error("speech synthesis unavailable: {0}")]
    Speech(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("assistant unavailable: {0}")]
pub struct AssistantUnavailable(pub String);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("no storage")]
    NoStorage,
    #[error("{0}")]
    Other(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
