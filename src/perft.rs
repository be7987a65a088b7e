//! Perft: count the leaf nodes of the legal move tree to a fixed depth.
//!
//! Counts are compared against published values to validate move
//! generation and make/take-back.

use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};

/// Node count below one legal root move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DivideEntry {
    pub mv: Move,
    pub nodes: u64,
}

/// Result of a perft run, split by root move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftReport {
    pub depth: u32,
    /// One entry per legal root move, in generation order
    pub entries: Vec<DivideEntry>,
    pub total_nodes: u64,
    pub elapsed: Duration,
}

impl PerftReport {
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.total_nodes as f64 / secs) as u64
        } else {
            0
        }
    }
}

impl Board {
    /// Number of legal move paths of length `depth` from this position.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.generate_moves() {
            if self.make_move(mv) {
                nodes += self.perft(depth - 1);
                self.take_back();
            }
        }

        nodes
    }

    /// Perft with a separate count for every legal root move.
    pub fn perft_divide(&mut self, depth: u32) -> PerftReport {
        let start = Instant::now();

        if depth == 0 {
            return PerftReport {
                depth,
                entries: Vec::new(),
                total_nodes: 1,
                elapsed: start.elapsed(),
            };
        }

        let mut entries = Vec::new();
        for mv in self.generate_moves() {
            if !self.make_move(mv) {
                continue;
            }
            let nodes = self.perft(depth - 1);
            self.take_back();

            #[cfg(feature = "logging")]
            log::trace!("divide {mv}: {nodes}");

            entries.push(DivideEntry { mv, nodes });
        }

        let report = finish_report(depth, entries, start);

        #[cfg(feature = "logging")]
        log::debug!(
            "perft depth {} nodes {} time_ms {}",
            depth,
            report.total_nodes,
            report.elapsed.as_millis()
        );

        report
    }

    /// Perft with root moves split across `threads` workers.
    ///
    /// Each worker searches on its own copy of the board. Entries come back
    /// in root-move order whatever the thread count.
    pub fn perft_parallel(&self, depth: u32, threads: usize) -> PerftReport {
        let start = Instant::now();
        let threads = threads.max(1);

        if depth == 0 {
            return PerftReport {
                depth,
                entries: Vec::new(),
                total_nodes: 1,
                elapsed: start.elapsed(),
            };
        }

        let mut root = self.clone();
        let root_moves = root.legal_moves();
        let results: Mutex<Vec<Option<u64>>> = Mutex::new(vec![None; root_moves.len()]);

        thread::scope(|scope| {
            for worker in 0..threads.min(root_moves.len()) {
                let mut board = self.clone();
                let root_moves = &root_moves;
                let results = &results;
                scope.spawn(move || {
                    let mut searched = 0u64;
                    for idx in (worker..root_moves.len()).step_by(threads) {
                        let mv = root_moves[idx];
                        let nodes = if board.make_move(mv) {
                            let nodes = board.perft(depth - 1);
                            board.take_back();
                            nodes
                        } else {
                            0
                        };
                        searched += nodes;
                        results.lock()[idx] = Some(nodes);
                    }

                    #[cfg(feature = "logging")]
                    log::debug!("perft worker {worker} finished with {searched} nodes");
                    #[cfg(not(feature = "logging"))]
                    let _ = searched;
                });
            }
        });

        let entries = root_moves
            .iter()
            .zip(results.into_inner())
            .map(|(&mv, nodes)| DivideEntry {
                mv,
                nodes: nodes.unwrap_or(0),
            })
            .collect();

        let report = finish_report(depth, entries, start);

        #[cfg(feature = "logging")]
        log::debug!(
            "parallel perft depth {} threads {} nodes {} time_ms {}",
            depth,
            threads,
            report.total_nodes,
            report.elapsed.as_millis()
        );

        report
    }
}

fn finish_report(depth: u32, entries: Vec<DivideEntry>, start: Instant) -> PerftReport {
    let total_nodes = entries.iter().map(|entry| entry.nodes).sum();
    PerftReport {
        depth,
        entries,
        total_nodes,
        elapsed: start.elapsed(),
    }
}
