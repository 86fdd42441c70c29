use thiserror::Error;

/// Why a print attempt produced nothing.
///
/// A failing print never leaves a partial append behind; the target input is
/// byte-for-byte what it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrintError {
    /// The value is outside the combinator's representable domain.
    #[error("output value is outside the printable domain")]
    OutsideDomain,
    /// The reverse transform has no inverse for the value.
    #[error("no inverse exists for the mapped output value")]
    NoInverse,
    /// Appending would leave the byte view holding invalid UTF-8 text.
    #[error("printed bytes are not valid UTF-8 text")]
    InvalidText,
}
