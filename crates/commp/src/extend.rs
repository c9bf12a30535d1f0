//! Growing a commitment to a larger padded piece size.

use sha2::{Digest, Sha256};

use crate::error::CommpError;
use crate::hash::pair_hash_with;
use crate::padding::nul_padding;
use crate::types::{Node, MAX_PIECE_SIZE, NODE_SIZE};

/// Grow `commp` from `source_padded_size` to `target_padded_size`, both in
/// bytes and both powers of two.
///
/// The source commitment is hashed with the nul-padding tower entry for its
/// level once per doubling, which equals digesting the original payload
/// zero-extended to the target size. Returns the source unchanged when the
/// sizes are equal.
pub fn extend_commp(
    commp: &[u8],
    source_padded_size: u64,
    target_padded_size: u64,
) -> Result<Node, CommpError> {
    if commp.len() != NODE_SIZE {
        return Err(CommpError::InvalidCommpLength { length: commp.len() });
    }
    if !source_padded_size.is_power_of_two() {
        return Err(CommpError::NotPowerOfTwo {
            what: "source",
            size: source_padded_size,
        });
    }
    if !target_padded_size.is_power_of_two() {
        return Err(CommpError::NotPowerOfTwo {
            what: "target",
            size: target_padded_size,
        });
    }
    if source_padded_size > target_padded_size {
        return Err(CommpError::TargetTooSmall {
            source: source_padded_size,
            target: target_padded_size,
        });
    }
    if source_padded_size < 128 {
        return Err(CommpError::SourceBelowMinimum {
            source: source_padded_size,
        });
    }
    if target_padded_size > MAX_PIECE_SIZE {
        return Err(CommpError::TargetAboveMaximum {
            target: target_padded_size,
            maximum: MAX_PIECE_SIZE,
        });
    }

    let mut out: Node = commp.try_into().unwrap();

    let source_log = source_padded_size.trailing_zeros() as usize;
    let target_log = target_padded_size.trailing_zeros() as usize;

    let mut sha = Sha256::new();
    for level in source_log..target_log {
        // -5 aligns the byte-size log to the node-count log (32-byte leaves)
        out = pair_hash_with(&mut sha, &out, nul_padding(level - 5));
    }

    Ok(out)
}
