use serde::Deserialize;

use x88_chess::board::Board;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<PerftPosition>,
}

#[derive(Deserialize)]
struct PerftPosition {
    name: String,
    fen: String,
    /// Expected node counts for depth 1, 2, ...
    nodes: Vec<u64>,
}

fn load_positions() -> PositionSet {
    let data = include_str!("data/perft_positions.json");
    serde_json::from_str(data).expect("invalid perft_positions.json")
}

#[test]
fn perft_suite() {
    for position in load_positions().positions {
        let mut board = Board::from_fen(&position.fen);
        for (depth, &expected) in (1u32..).zip(&position.nodes) {
            let nodes = board.perft(depth);
            assert_eq!(
                nodes, expected,
                "{} depth {}: expected {}, got {}",
                position.name, depth, expected, nodes
            );
        }
        assert_eq!(board.to_fen(), position.fen, "{} not restored", position.name);
    }
}

#[test]
fn parallel_perft_suite() {
    for position in load_positions().positions {
        let board = Board::from_fen(&position.fen);
        let depth = position.nodes.len().min(2);
        let report = board.perft_parallel(depth as u32, 4);
        assert_eq!(
            report.total_nodes,
            position.nodes[depth - 1],
            "{} depth {}",
            position.name,
            depth
        );
    }
}

#[test]
fn divide_counts_every_legal_root_move() {
    for position in load_positions().positions {
        let mut board = Board::from_fen(&position.fen);
        let report = board.perft_divide(1);
        assert_eq!(report.entries.len() as u64, position.nodes[0], "{}", position.name);
        assert!(report.entries.iter().all(|entry| entry.nodes == 1));
    }
}
