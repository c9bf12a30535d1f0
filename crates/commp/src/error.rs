//! Error type shared by the accumulator and the extension utility.

/// Everything that can go wrong while accumulating a payload or extending a
/// commitment. All variants are returned to the caller; none are retried or
/// swallowed internally, and no partial commitment ever escapes.
///
/// `Display`/`Error` are implemented by hand rather than via
/// `#[derive(thiserror::Error)]`: thiserror auto-wires `Error::source()` for
/// any field literally named `source`, but here `source`/`target` are plain
/// `u64` payload sizes, not nested errors, so the derive fails to compile.
#[derive(Debug, PartialEq, Eq)]
pub enum CommpError {
    /// A write would push the cumulative payload past the largest unpadded
    /// piece Filecoin supports. The write is rejected whole; the
    /// accumulator keeps its previous state.
    PayloadOverflow { write_size: usize, max_payload: u64 },

    /// A commitment is undefined for payloads shorter than 65 bytes.
    /// Recoverable: write more bytes and digest again.
    InsufficientInput { bytes_consumed: u64 },

    /// The source commitment handed to the extension utility was not a
    /// 32-byte node.
    InvalidCommpLength { length: usize },

    /// A padded piece size must have exactly one bit set.
    NotPowerOfTwo { what: &'static str, size: u64 },

    /// The extension target is smaller than the source.
    TargetTooSmall { source: u64, target: u64 },

    /// The extension source is below the 128-byte minimum piece.
    SourceBelowMinimum { source: u64 },

    /// The extension target exceeds the 64 GiB piece cap.
    TargetAboveMaximum { target: u64, maximum: u64 },
}

impl std::fmt::Display for CommpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommpError::PayloadOverflow { write_size, max_payload } => write!(
                f,
                "writing {write_size} bytes to the accumulator would overflow the maximum supported unpadded piece size {max_payload}"
            ),
            CommpError::InsufficientInput { bytes_consumed } => write!(
                f,
                "insufficient state accumulated: commP is not defined for inputs shorter than 65 bytes, but only {bytes_consumed} processed so far"
            ),
            CommpError::InvalidCommpLength { length } => write!(
                f,
                "provided commP must be exactly 32 bytes long, got {length} bytes instead"
            ),
            CommpError::NotPowerOfTwo { what, size } => {
                write!(f, "{what} padded size {size} is not a power of 2")
            }
            CommpError::TargetTooSmall { source, target } => write!(
                f,
                "source padded size {source} larger than target padded size {target}"
            ),
            CommpError::SourceBelowMinimum { source } => write!(
                f,
                "source padded size {source} smaller than the minimum of 128 bytes"
            ),
            CommpError::TargetAboveMaximum { target, maximum } => write!(
                f,
                "target padded size {target} larger than the maximum of {maximum} bytes"
            ),
        }
    }
}

impl std::error::Error for CommpError {}
