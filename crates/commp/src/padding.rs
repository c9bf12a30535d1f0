//! Nul-padding tower: roots of all-zero subtrees, one per layer.
//!
//! `P[0]` is an all-zero leaf; `P[i]` is the pair hash of two copies of
//! `P[i-1]`. Layer workers use `P[level]` to complete a partial right spine
//! at close time, and [`extend_commp`](crate::extend_commp) climbs the tower
//! to grow a commitment to a larger padded size.

use std::sync::OnceLock;

use crate::hash::pair_hash;
use crate::types::{Node, MAX_LAYERS};

static NUL_PADDING: OnceLock<[Node; MAX_LAYERS]> = OnceLock::new();

/// The all-zero subtree root whose top sits at `level` of the reducer.
///
/// Valid levels are `0..MAX_LAYERS`; the table is built once on first use
/// and read concurrently without synchronization afterwards.
pub fn nul_padding(level: usize) -> &'static Node {
    &tower()[level]
}

fn tower() -> &'static [Node; MAX_LAYERS] {
    NUL_PADDING.get_or_init(|| {
        let mut stack = [[0u8; 32]; MAX_LAYERS];
        for i in 1..MAX_LAYERS {
            stack[i] = pair_hash(&stack[i - 1], &stack[i - 1]);
        }
        stack
    })
}
