use datewheel_format::PatternError;
use thiserror::Error;

/// Errors surfaced by [`crate::Wheel`] read operations and (re)configuration.
///
/// Lookup misses and unparseable era digits are not errors: they degrade to "cursor unchanged" and
/// "text unchanged" respectively and are reported through `log`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    #[error("wheel value read before any value was set")]
    ValueNotSet,
    #[error("picker cursor {index} is outside the wheel's {len} values")]
    CursorOutOfRange { index: usize, len: usize },
    #[error("wheel has no values")]
    EmptyValues,
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
