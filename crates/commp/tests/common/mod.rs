//! Shared helpers for the integration tests.

use commp::{Calc, Node};

/// Deterministic xorshift64* generator; the vector corpus under `testdata/`
/// was produced with the same generator seeded with 1337.
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    pub fn new(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift state must be non-zero");
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// The next `n` bytes of the stream, little-endian within each word.
    pub fn bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(n + 7);
        while out.len() < n {
            out.extend_from_slice(&self.next_u64().to_le_bytes());
        }
        out.truncate(n);
        out
    }
}

/// Digest a payload through an assortment of write sizes: 127 bytes, a
/// quarter, 254 bytes, a third, and the rest, stress-testing the carry
/// buffer the same way whatever chunking a caller picks would.
pub fn stressed_digest(payload: &[u8]) -> (Node, u64) {
    let calc = Calc::default();
    let mut rest = payload;
    for size in [127, payload.len() / 4, 254, payload.len() / 3, payload.len() / 4] {
        let take = size.min(rest.len());
        if take == 0 {
            continue;
        }
        let (head, tail) = rest.split_at(take);
        calc.write(head).unwrap();
        rest = tail;
    }
    calc.write(rest).unwrap();
    calc.digest().unwrap()
}
