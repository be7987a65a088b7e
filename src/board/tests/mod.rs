//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-path counts against published values
//! - `make_unmake.rs` - Make/take-back correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod make_unmake;
