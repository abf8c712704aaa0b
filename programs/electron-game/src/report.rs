//! Console rendering of tournament results

use spin_logic::{GameConfig, PermutationReport, TournamentResult};
use std::fmt::Write;

/// Lines printed for a single permutation: ordinal, strategy indices, score
pub fn permutation_lines(report: &PermutationReport, config: &GameConfig) -> String {
    let p = &report.permutation;
    let [q1, p1, q2] = match p.moves(config) {
        Ok((q1, p1, q2)) => [q1.name(), p1.name(), q2.name()],
        Err(_) => ["?"; 3],
    };
    format!(
        "Permutation #{}\nStrategies: Q1={} ({}) P={} ({}) Q2={} ({})\nScore: P {} - Q {}\n",
        p.ordinal,
        p.q_first,
        q1,
        p.p_move,
        p1,
        p.q_second,
        q2,
        report.score.p,
        report.score.q,
    )
}

/// Full text report: completed permutations, then aborted ones, then totals
pub fn render_text(result: &TournamentResult) -> String {
    let mut out = String::new();
    for report in &result.reports {
        out.push_str(&permutation_lines(report, &result.config));
        out.push('\n');
    }
    for failure in &result.failures {
        let _ = writeln!(out, "Permutation #{} aborted: {}\n", failure.ordinal, failure.error);
    }

    let sweeps: Vec<_> = result
        .q_sweeps()
        .map(|r| r.permutation.ordinal.to_string())
        .collect();
    // writing into a String cannot fail
    let _ = writeln!(out, "Totals: P {} - Q {}", result.p_total(), result.q_total());
    let _ = writeln!(
        out,
        "Q won every round in permutations: {}",
        if sweeps.is_empty() { "none".to_string() } else { sweeps.join(", ") }
    );
    out
}
