use std::fmt::Write;

use crate::perft::PerftReport;

/// Render a perft report: per-move lines first when `divide` is set, then
/// the summary line.
pub fn format_report(report: &PerftReport, divide: bool) -> String {
    let mut out = String::new();
    if divide {
        for entry in &report.entries {
            let _ = writeln!(out, "{}: {}", entry.mv, entry.nodes);
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "depth {} nodes {} time_ms {} nps {}",
        report.depth,
        report.total_nodes,
        report.elapsed.as_millis(),
        report.nodes_per_second()
    );
    out
}

pub fn print_report(report: &PerftReport, divide: bool) {
    print!("{}", format_report(report, divide));
}
