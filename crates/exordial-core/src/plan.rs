//! Plan extraction from raw planner output.
//!
//! The planner is asked for a bare numbered list, but model output is
//! free text; the filter below is a heuristic and deliberately
//! swappable. Whatever predicate is used, zero surviving lines is a
//! fatal empty plan — the flow never synthesizes a fallback.

use crate::types::Plan;

/// Predicate deciding whether a raw planner line is a numbered section
/// caption.
pub type PlanFilter = fn(&str) -> bool;

/// Default caption heuristic: the trimmed line starts with an ASCII
/// digit and contains a period, matching ordinal prefixes like
/// "2.1 DA RESPONSABILIDADE CIVIL OBJETIVA".
pub fn numbered_caption(line: &str) -> bool {
    let line = line.trim();
    line.chars().next().is_some_and(|c| c.is_ascii_digit()) && line.contains('.')
}

/// Extract the plan: keep trimmed, non-blank lines satisfying the
/// filter, in source order. Everything else is discarded.
pub fn parse_plan(raw: &str, filter: PlanFilter) -> Plan {
    let titles = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && filter(line))
        .map(str::to_string)
        .collect();
    Plan::new(titles)
}
