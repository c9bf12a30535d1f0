//! The per-layer merkle reduction pipeline.
//!
//! One worker thread per active tree layer, linked by bounded channels of
//! 32-byte nodes. Leaves enter layer 0; each layer pairs adjacent nodes,
//! hashes them and forwards the parent upward. A layer spawns its parent
//! lazily on its first emission, so a stream only ever runs as many workers
//! as its tree is tall. Closing the leaf channel collapses the whole tower:
//! every layer completes its right spine with the nul-padding node for its
//! level and propagates the close, until the highest layer publishes its
//! lone held node as the commitment.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread;

use sha2::{Digest, Sha256};

use crate::hash::pair_hash_with;
use crate::padding::nul_padding;
use crate::types::Node;

/// Per-layer channel depth. A throughput knob, not a correctness one.
const LAYER_QUEUE_DEPTH: usize = 256;

/// A running reduction tower: a sender feeding layer 0 and a receiver for
/// the final commitment. Dropping `leaf_tx` closes the pipeline.
pub(crate) struct Pipeline {
    pub(crate) leaf_tx: SyncSender<Node>,
    pub(crate) result_rx: Receiver<Node>,
}

impl Pipeline {
    /// Spawn layer 0 and return the handles feeding and draining the tower.
    pub(crate) fn start() -> Self {
        let (result_tx, result_rx) = sync_channel(1);
        let leaf_tx = Layer::spawn(0, result_tx);
        Pipeline { leaf_tx, result_rx }
    }

    /// Terminate all workers without keeping the result: close the leaf
    /// queue and drain whatever the collapse produces.
    pub(crate) fn abort(self) {
        drop(self.leaf_tx);
        // recv errors once every worker has exited without publishing,
        // which is exactly the no-leaves-yet case
        let _ = self.result_rx.recv();
    }
}

struct Layer {
    level: usize,
    rx: Receiver<Node>,
    result_tx: SyncSender<Node>,
}

impl Layer {
    /// Start the worker for `level` and hand back the sender feeding it.
    fn spawn(level: usize, result_tx: SyncSender<Node>) -> SyncSender<Node> {
        let (tx, rx) = sync_channel(LAYER_QUEUE_DEPTH);
        let layer = Layer { level, rx, result_tx };
        thread::spawn(move || layer.run());
        tx
    }

    fn run(self) {
        // one hasher per worker, reused across every pair
        let mut sha = Sha256::new();
        let mut held: Option<Node> = None;
        let mut parent: Option<SyncSender<Node>> = None;

        while let Ok(node) = self.rx.recv() {
            match held.take() {
                None => held = Some(node),
                Some(left) => {
                    let tx = parent.get_or_insert_with(|| {
                        Layer::spawn(self.level + 1, self.result_tx.clone())
                    });
                    if tx.send(pair_hash_with(&mut sha, &left, &node)).is_err() {
                        return;
                    }
                }
            }
        }

        // input closed: collapse
        match parent {
            // never emitted a parent, so this layer is the top of the tree;
            // its lone held node is the commitment. `held` is empty only
            // when layer 0 is closed before any leaf arrived (reset), in
            // which case nothing is published and the result channel simply
            // disconnects.
            None => {
                if let Some(root) = held {
                    let _ = self.result_tx.send(root);
                }
            }
            // complete the right spine with the nul padding for this level,
            // then propagate the close by dropping the parent sender
            Some(tx) => {
                if let Some(left) = held {
                    let _ = tx.send(pair_hash_with(&mut sha, &left, nul_padding(self.level)));
                }
            }
        }
    }
}
