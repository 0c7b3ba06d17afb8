//! Line-oriented test-case format.
//!
//! ```text
//! 1
//! 5 2
//! ??1??
//! 01100
//! ```
//!
//! The first line holds the number of cases `T`; each case is a `"<n> <k>"`
//! header, a pattern over `0`, `1`, `?` and a reference over `0`, `1`.
//! Blank lines are ignored.

use crate::error::CaseParseError;
use crate::instance::Instance;
use crate::solution::Solution;
use std::fmt::Write as _;

/// Parse every case in `text`.
pub fn parse_cases(text: &str) -> Result<Vec<Instance>, CaseParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, header) = lines
        .next()
        .ok_or(CaseParseError::MissingLine { what: "case count" })?;
    let count: usize = header.parse().map_err(|_| CaseParseError::BadHeader {
        line: line_no,
        what: "case count",
        found: header.to_string(),
    })?;

    // The header is untrusted; only reserve what a small file could need.
    let mut cases = Vec::with_capacity(count.min(1024));
    for case in 1..=count {
        let (line_no, dims) = lines
            .next()
            .ok_or(CaseParseError::MissingLine { what: "\"<n> <k>\" header" })?;
        let (n, k) = parse_dims(dims).ok_or_else(|| CaseParseError::BadHeader {
            line: line_no,
            what: "\"<n> <k>\"",
            found: dims.to_string(),
        })?;
        let (_, pattern) = lines
            .next()
            .ok_or(CaseParseError::MissingLine { what: "pattern" })?;
        let (_, reference) = lines
            .next()
            .ok_or(CaseParseError::MissingLine { what: "reference" })?;
        let instance = Instance::parse(n, k, pattern, reference)
            .map_err(|source| CaseParseError::Instance { case, source })?;
        cases.push(instance);
    }
    Ok(cases)
}

fn parse_dims(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let n = parts.next()?.parse().ok()?;
    let k = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((n, k))
}

/// Two output lines: the minimum cost and the witness.
///
/// An infeasible case prints `inf` followed by an empty witness line.
pub fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    match solution {
        Solution::Feasible { cost, witness } => {
            let _ = writeln!(out, "{cost}");
            let _ = writeln!(out, "{witness}");
        }
        Solution::Infeasible => {
            out.push_str("inf\n\n");
        }
    }
    out
}
