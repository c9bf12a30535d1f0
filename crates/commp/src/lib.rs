//! Streaming Filecoin piece commitment (commP / CommD) calculator.
//!
//! Computes the 32-byte data-commitment-v1 digest of an arbitrary byte
//! stream: every 127 payload bytes are bit-expanded into 128 Fr32 leaf
//! bytes, and the leaf stream is folded through a truncated-SHA256 binary
//! merkle tree whose nodes keep the top two bits of their last byte clear.
//! The output is byte-identical to the Filecoin reference proofs code for
//! the same input.
//!
//! # Core concepts
//!
//! - **Quad**: a 127-byte payload window, expanded to four 32-byte leaves.
//! - **Node**: a 32-byte leaf or interior digest, Fr32-constrained.
//! - **Padded piece size**: the power-of-two byte count of the zero-extended
//!   tree over the payload, reported alongside the commitment.
//!
//! # Example
//!
//! ```
//! use commp::{extend_commp, Calc};
//!
//! let calc = Calc::default();
//! calc.write(b"commitments are calculated over streams of at least 65 bytes")
//!     .unwrap();
//! calc.write(b"...like this one").unwrap();
//! let (commp, padded_size) = calc.digest().unwrap();
//! assert_eq!(padded_size, 128);
//!
//! // grow the same commitment to a 2 KiB piece
//! let grown = extend_commp(&commp, padded_size, 2048).unwrap();
//! assert_ne!(grown, commp);
//! ```
//!
//! The raw digest is not a CID; wrap it with an external codec
//! (fil-commitment-unsealed / sha2-256-trunc254-padded) if one is needed.

pub mod calc;
pub mod error;
pub mod extend;
pub mod fr32;
pub mod hash;
pub mod padding;
pub mod types;

mod layer;

// Re-exports for convenience
pub use calc::Calc;
pub use error::CommpError;
pub use extend::extend_commp;
pub use fr32::{expand_quad, EXPANDED_QUAD_SIZE};
pub use hash::pair_hash;
pub use padding::nul_padding;
pub use types::{
    from_hex, to_hex, Node, LEAVES_PER_QUAD, MAX_LAYERS, MAX_PIECE_PAYLOAD, MAX_PIECE_SIZE,
    MIN_PIECE_PAYLOAD, NODE_SIZE, QUAD_SIZE,
};
