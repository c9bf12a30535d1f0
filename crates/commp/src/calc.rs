//! The streaming piece-commitment accumulator.

use std::io;
use std::sync::Mutex;

use crate::error::CommpError;
use crate::fr32::expand_quad;
use crate::layer::Pipeline;
use crate::types::{Node, MAX_PIECE_PAYLOAD, MIN_PIECE_PAYLOAD, NODE_SIZE, QUAD_SIZE};

/// Streaming commP calculator.
///
/// Behaves like a classic incremental hash: feed arbitrary-size byte slices
/// through [`write`](Calc::write), then collapse the state with
/// [`digest`](Calc::digest) to obtain the 32-byte commitment and the padded
/// piece size. The default value is ready to accept writes without further
/// initialization, and a successful digest resets the accumulator for reuse.
///
/// All methods serialize on an internal mutex, so a shared `Calc` may be
/// driven from multiple threads; writes are sequenced deterministically.
///
/// The first write starts one background worker per active merkle layer. An
/// accumulator abandoned without a digest must be [`reset`](Calc::reset) to
/// terminate them.
///
/// # Example
///
/// ```
/// use commp::Calc;
///
/// let calc = Calc::default();
/// calc.write(&[0u8; 2032]).unwrap();
/// let (commp, padded_size) = calc.digest().unwrap();
/// assert_eq!(padded_size, 2048);
/// assert_eq!(commp[31] & 0xC0, 0);
/// ```
#[derive(Default)]
pub struct Calc {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    bytes_consumed: u64,
    carry: Vec<u8>,
    pipeline: Option<Pipeline>,
}

impl Calc {
    /// Create an empty accumulator. Equivalent to `Calc::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload bytes consumed per processing round: 127. Writing in
    /// multiples of this avoids the internal carry buffer.
    pub fn block_size(&self) -> usize {
        QUAD_SIZE
    }

    /// Size of the digest returned by [`sum`](Calc::sum) and
    /// [`digest`](Calc::digest): 32 bytes.
    pub fn digest_size(&self) -> usize {
        NODE_SIZE
    }

    /// Add bytes to the accumulator for a subsequent digest.
    ///
    /// Returns the number of bytes accepted, which is always `input.len()`.
    /// Fails with [`CommpError::PayloadOverflow`] when the write would push
    /// the cumulative payload past [`MAX_PIECE_PAYLOAD`]; an oversized write
    /// is rejected whole, no prefix of it is absorbed.
    pub fn write(&self, input: &[u8]) -> Result<usize, CommpError> {
        let input_size = input.len();
        if input_size == 0 {
            return Ok(0);
        }
        let mut state = self.state.lock().unwrap();

        if state.bytes_consumed + input_size as u64 > MAX_PIECE_PAYLOAD {
            return Err(CommpError::PayloadOverflow {
                write_size: input_size,
                max_payload: MAX_PIECE_PAYLOAD,
            });
        }

        // just starting: spawn the bottom layer worker
        if state.bytes_consumed == 0 {
            state.carry.reserve(QUAD_SIZE);
            state.pipeline = Some(Pipeline::start());
        }

        state.bytes_consumed += input_size as u64;

        let mut input = input;
        if !state.carry.is_empty() {
            let want = QUAD_SIZE - state.carry.len();

            // short write, just carry it
            if input.len() < want {
                state.carry.extend_from_slice(input);
                return Ok(input_size);
            }

            let (head, rest) = input.split_at(want);
            state.carry.extend_from_slice(head);
            input = rest;

            let quad: [u8; QUAD_SIZE] = state.carry[..].try_into().unwrap();
            state.push_quad(&quad);
            state.carry.clear();
        }

        let mut quads = input.chunks_exact(QUAD_SIZE);
        for quad in &mut quads {
            state.push_quad(quad.try_into().unwrap());
        }
        state.carry.extend_from_slice(quads.remainder());

        Ok(input_size)
    }

    /// Collapse the accumulated state into the raw 32-byte commitment and
    /// the padded piece size.
    ///
    /// Fails with [`CommpError::InsufficientInput`] below the 65-byte
    /// minimum, in which case the state is preserved and more bytes may be
    /// written before retrying. On success the accumulator is reset and all
    /// background workers have terminated.
    pub fn digest(&self) -> Result<(Node, u64), CommpError> {
        let mut state = self.state.lock().unwrap();

        if state.bytes_consumed < MIN_PIECE_PAYLOAD {
            return Err(CommpError::InsufficientInput {
                bytes_consumed: state.bytes_consumed,
            });
        }

        // flush any residue, padded up with zeroes to a whole quad
        if !state.carry.is_empty() {
            state.carry.resize(QUAD_SIZE, 0);
            let quad: [u8; QUAD_SIZE] = state.carry[..].try_into().unwrap();
            state.push_quad(&quad);
        }

        let padded_piece_size = padded_piece_size(state.bytes_consumed);

        // closing the leaf queue collapses the tower all the way up
        let Pipeline { leaf_tx, result_rx } = state
            .pipeline
            .take()
            .expect("pipeline running after a successful write");
        drop(leaf_tx);
        let commp = result_rx
            .recv()
            .expect("layer workers terminated without publishing a commitment");

        *state = State::default();
        Ok((commp, padded_piece_size))
    }

    /// Append the commitment to `prefix`, resetting the accumulator.
    ///
    /// A thin wrapper around [`digest`](Calc::digest) for fixed-signature
    /// hash call sites; panics on the errors digest would return.
    pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let (commp, _) = self.digest().expect("commP digest failed");
        let mut out = Vec::with_capacity(prefix.len() + NODE_SIZE);
        out.extend_from_slice(prefix);
        out.extend_from_slice(&commp);
        out
    }

    /// Return the accumulator to its initial empty state, terminating any
    /// background layer workers. Safe to call in any state.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        if let Some(pipeline) = state.pipeline.take() {
            pipeline.abort();
        }
        *state = State::default();
    }
}

impl State {
    fn push_quad(&self, quad: &[u8; QUAD_SIZE]) {
        let expanded = expand_quad(quad);
        let leaf_tx = &self
            .pipeline
            .as_ref()
            .expect("pipeline running while quads are pushed")
            .leaf_tx;
        for leaf in expanded.chunks_exact(NODE_SIZE) {
            leaf_tx
                .send(leaf.try_into().unwrap())
                .expect("layer 0 worker exited prematurely");
        }
    }
}

/// The padded piece size for a payload: 128/127ths of the quad-aligned
/// payload, rounded up to the next power of two.
fn padded_piece_size(payload: u64) -> u64 {
    let raw = (payload + QUAD_SIZE as u64 - 1) / QUAD_SIZE as u64 * 128;
    raw.next_power_of_two()
}

/// Writing through `std::io` adapters drives the accumulator like any other
/// sink, so `io::copy(&mut reader, &mut &calc)` streams a whole source
/// through the hasher.
impl io::Write for &Calc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Calc::write(*self, buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for Calc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Calc::write(self, buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
