//! Core node type, sizing constants and hex helpers.

/// 32-byte merkle node: either an Fr32 leaf or an interior digest.
///
/// Every node carries the Fr32 field-element constraint: the two most
/// significant bits of byte 31 are zero.
pub type Node = [u8; 32];

/// Bytes in a [`Node`].
pub const NODE_SIZE: usize = 32;

/// Payload bytes consumed per expansion round. Writing in multiples of this
/// obviates the internal carry buffer.
pub const QUAD_SIZE: usize = 127;

/// Leaves produced per quad: 127 payload bytes expand to 128 leaf bytes.
pub const LEAVES_PER_QUAD: usize = 4;

/// Height cap of the reduction pipeline: log2(64 GiB / 32).
pub const MAX_LAYERS: usize = 31;

/// Largest supported padded piece: 64 GiB.
pub const MAX_PIECE_SIZE: u64 = 1 << (MAX_LAYERS + 5);

/// Largest payload that still fits the 64 GiB padded piece.
pub const MAX_PIECE_PAYLOAD: u64 = MAX_PIECE_SIZE / 128 * 127;

/// Smallest payload for which a piece commitment is defined.
pub const MIN_PIECE_PAYLOAD: u64 = 65;

/// Convert a node to a lowercase hex string
pub fn to_hex(node: &Node) -> String {
    hex::encode(node)
}

/// Convert a 64-character hex string to a node
pub fn from_hex(hex_str: &str) -> Result<Node, hex::FromHexError> {
    let bytes = hex::decode(hex_str)?;
    if bytes.len() != NODE_SIZE {
        return Err(hex::FromHexError::InvalidStringLength);
    }
    let mut node = [0u8; NODE_SIZE];
    node.copy_from_slice(&bytes);
    Ok(node)
}
