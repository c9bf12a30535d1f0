//! Truncated-SHA256 pair hashing.
//!
//! Interior tree nodes are `SHA256(left || right)` with the two most
//! significant bits of the last byte cleared, keeping every node a valid
//! BLS12-381 scalar field element (the Fr32 constraint).

use sha2::{Digest, Sha256};

use crate::types::Node;

/// Mask clearing the two most significant bits of a node's last byte.
pub(crate) const FR32_MASK: u8 = 0x3F;

/// Hash two nodes into their parent, clearing the top two bits of the result.
pub fn pair_hash(left: &Node, right: &Node) -> Node {
    let mut sha = Sha256::new();
    pair_hash_with(&mut sha, left, right)
}

/// Same as [`pair_hash`] but reusing a caller-held hasher between pairs.
pub(crate) fn pair_hash_with(sha: &mut Sha256, left: &Node, right: &Node) -> Node {
    sha.update(left);
    sha.update(right);
    let mut node: Node = sha.finalize_reset().into();
    node[31] &= FR32_MASK;
    node
}
