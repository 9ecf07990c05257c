//! Move-path enumeration for validating the generator.
//!
//! Counts agree with published reference values only if every rule
//! (pins, castling through check, en passant timing, promotion fan-out)
//! is implemented exactly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use super::{GameState, Move};

impl GameState {
    /// Number of leaf positions reachable in exactly `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move_unchecked(m);
            nodes += self.perft(depth - 1);
            self.undo_last();
        }

        nodes
    }

    /// Per-root-move leaf counts, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let divide: Vec<(Move, u64)> = self
            .legal_moves()
            .into_iter()
            .map(|m| {
                self.make_move_unchecked(m);
                let nodes = self.perft(depth - 1);
                self.undo_last();
                (m, nodes)
            })
            .collect();
        log_trace!(
            "perft divide depth {}: {} nodes",
            depth,
            divide.iter().map(|(_, n)| n).sum::<u64>()
        );
        divide
    }

    /// Same result as [`GameState::perft_divide`], with root moves shared
    /// among `threads` workers.
    ///
    /// Every worker plays on its own clone of the game; only the per-move
    /// counts are merged.
    #[must_use]
    pub fn perft_divide_parallel(&self, depth: usize, threads: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let roots = self.legal_moves();
        let threads = threads.clamp(1, roots.len().max(1));
        let next = AtomicUsize::new(0);
        let results: Mutex<Vec<(usize, Move, u64)>> = Mutex::new(Vec::with_capacity(roots.len()));

        let work = |mut game: GameState| loop {
            let idx = next.fetch_add(1, Ordering::Relaxed);
            let Some(m) = roots.get(idx) else {
                break;
            };
            game.make_move_unchecked(m);
            let nodes = game.perft(depth - 1);
            game.undo_last();
            results.lock().push((idx, m, nodes));
        };

        thread::scope(|scope| {
            // The calling thread is worker 0.
            for worker_id in 1..threads {
                let game = self.clone();
                let spawned = thread::Builder::new()
                    .name(format!("perft-{worker_id}"))
                    .spawn_scoped(scope, move || work(game));
                if let Err(err) = spawned {
                    // Its share of the roots goes to the workers that did start.
                    log_debug!("perft worker {} failed to start: {}", worker_id, err);
                }
            }
            work(self.clone());
        });

        let mut results = results.into_inner();
        results.sort_unstable_by_key(|&(idx, _, _)| idx);
        results.into_iter().map(|(_, m, nodes)| (m, nodes)).collect()
    }

    /// Undo a move this module just made.
    fn undo_last(&mut self) {
        let undone = self.undo_move();
        debug_assert!(undone.is_ok(), "perft undo without a matching make");
    }
}
