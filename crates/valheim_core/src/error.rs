use std::error::Error;
use std::fmt;

/// Failure modes of the binary decoders.
///
/// "No data" outcomes (an empty chest, a chest with no inventory payload)
/// are not errors; they come back as empty-but-valid results so callers can
/// branch on emptiness instead of catching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No offset in the character file produced even one plausible skill
    /// record. Hard failure of the whole skill decode.
    SkillBlockNotFound,
    /// A read ran past the end of the buffer. Fatal to the current decode
    /// call; never produces a partial result.
    Truncated { needed: usize, remaining: usize },
    /// A layout assumption was violated by the input, e.g. the reserved-byte
    /// skip for an item record came out negative.
    MalformedRecord(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::SkillBlockNotFound => {
                write!(f, "could not locate skills block")
            }
            DecodeError::Truncated { needed, remaining } => write!(
                f,
                "truncated record: needed {needed} bytes, {remaining} remaining"
            ),
            DecodeError::MalformedRecord(msg) => write!(f, "malformed record: {msg}"),
        }
    }
}

impl Error for DecodeError {}
