//! Fr32 bit-expansion: 127 payload bytes to 128 leaf bytes.
//!
//! Filecoin treats the payload as a little-endian bitstream and inserts two
//! zero bits after every 254-bit group, so that each 32-byte leaf decodes to
//! a valid BLS12-381 scalar. Over a 127-byte window this materializes as
//! four 31-byte shift runs with a masked boundary byte in between:
//!
//! ```text
//! out[  0.. 32] = in[  0.. 32],                    out[ 31] &= 0x3F
//! out[ 32.. 64] = (in << 2 | in >> 6) pairwise,    out[ 63] &= 0x3F
//! out[ 64.. 96] = (in << 4 | in >> 4) pairwise,    out[ 95] &= 0x3F
//! out[ 96..128] = (in << 6 | in >> 2) pairwise,    out[127]  = in[126] >> 2
//! ```

use crate::types::QUAD_SIZE;

/// Bytes produced per quad: four 32-byte leaves.
pub const EXPANDED_QUAD_SIZE: usize = QUAD_SIZE + 1;

/// Expand one 127-byte quad into four 32-byte Fr32 leaves.
///
/// Pure and allocation-free aside from the returned slab. Each 32-byte slice
/// of the output is a leaf, to be fed to the reduction pipeline in order.
pub fn expand_quad(quad: &[u8; QUAD_SIZE]) -> [u8; EXPANDED_QUAD_SIZE] {
    let mut out = [0u8; EXPANDED_QUAD_SIZE];

    // First 31 bytes plus 6 bits pass through untouched; the first 2-bit
    // shim lands in the masked-off top of byte 31.
    out[..32].copy_from_slice(&quad[..32]);
    out[31] &= 0x3F;

    for i in 31..63 {
        out[i + 1] = quad[i + 1] << 2 | quad[i] >> 6;
    }
    out[63] &= 0x3F;

    for i in 63..95 {
        out[i + 1] = quad[i + 1] << 4 | quad[i] >> 4;
    }
    out[95] &= 0x3F;

    for i in 95..126 {
        out[i + 1] = quad[i + 1] << 6 | quad[i] >> 2;
    }
    // the final 6-bit remainder is exactly the value of the last byte
    out[127] = quad[126] >> 2;

    out
}
