//! Structural predicates over a group of normalized lines.
//!
//! Each predicate is independent and pure; the classifier composes them in
//! priority order. Lines are expected to be whitespace-compacted already.

use crate::core::text::{char_len, compact_line};
use regex::Regex;
use std::sync::LazyLock;

/// A leading `-`, `*` or `•` followed by whitespace
pub static BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s+").unwrap());

static LABELLED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][^:|]{1,90}:\s+.+").unwrap());

static DIVIDER_CELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").unwrap());

static DASH_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{5,}").unwrap());

static MATH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(Delta|Sum|ARPU|LTV|CAC|iROAS)\b").unwrap());

const MAX_HEADING_CHARS: usize = 120;
const HEADING_WORDS: std::ops::RangeInclusive<usize> = 2..=16;
const MAX_ENUMERATION_CHARS: usize = 110;
const LABELLED_LIST_RATIO: f64 = 0.6;

/// Split a line on `|` into trimmed, non-empty cells
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(compact_line)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// At least two lines, each with at least two pipe-delimited cells
pub fn is_table(lines: &[String]) -> bool {
    lines.len() >= 2 && lines.iter().all(|line| split_cells(line).len() >= 2)
}

/// Every cell is a markdown divider such as `---` or `:---:`
pub fn is_divider_row(cells: &[String]) -> bool {
    !cells.is_empty() && cells.iter().all(|cell| DIVIDER_CELL.is_match(cell))
}

/// Equations, or a dash rule accompanied by a metric abbreviation
pub fn is_formula(lines: &[String]) -> bool {
    if lines.len() < 2 || has_pipe(lines) {
        return false;
    }

    let has_equation = lines.iter().any(|line| line.contains('='));
    let has_rule = lines.iter().any(|line| DASH_RULE.is_match(line));
    let has_math_token = lines.iter().any(|line| MATH_TOKEN.is_match(line));

    has_equation || (has_rule && has_math_token)
}

/// A short, unpunctuated line of a few words
pub fn is_heading(line: &str) -> bool {
    if line.is_empty() || char_len(line) > MAX_HEADING_CHARS {
        return false;
    }
    if BULLET_PREFIX.is_match(line) || line.contains('|') {
        return false;
    }
    if ends_sentence(line) || line.ends_with('=') {
        return false;
    }

    let words = line.split_whitespace().count();
    HEADING_WORDS.contains(&words) && line.chars().any(|c| c.is_ascii_alphabetic())
}

/// Bulleted lines, mostly `label: value` lines, or a short enumeration
pub fn is_list(lines: &[String]) -> bool {
    if lines.len() < 2 || has_pipe(lines) {
        return false;
    }

    if lines.iter().all(|line| BULLET_PREFIX.is_match(line)) {
        return true;
    }

    let labelled = lines.iter().filter(|line| LABELLED_LINE.is_match(line)).count();
    if labelled as f64 / lines.len() as f64 >= LABELLED_LIST_RATIO {
        return true;
    }

    // Plain enumeration: only when every line is short and none reads as prose
    lines.len() >= 3
        && lines
            .iter()
            .all(|line| char_len(line) <= MAX_ENUMERATION_CHARS && !ends_sentence(line))
}

fn has_pipe(lines: &[String]) -> bool {
    lines.iter().any(|line| line.contains('|'))
}

fn ends_sentence(line: &str) -> bool {
    line.ends_with(['.', '!', '?'])
}
