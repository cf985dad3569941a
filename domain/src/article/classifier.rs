//! Chunking and block classification.

use super::block::{Block, Table};
use super::heuristics::{is_formula, is_heading, is_list, is_table, split_cells};
use crate::core::text::compact_line;
use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

/// Two or more consecutive line breaks (LF or CRLF)
static CHUNK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:\r?\n)+").unwrap());

type Predicate = fn(&[String]) -> bool;
type Builder = fn(Vec<String>) -> Block;

/// Body rules in priority order. Paragraph is the fallback.
const BODY_RULES: [(Predicate, Builder); 3] = [
    (is_table, table_block),
    (is_formula, formula_block),
    (is_list, list_block),
];

/// Lazily classify `text` into blocks, in document order.
///
/// The iterator is `Clone`: cloning it at any point yields an independent
/// iterator that replays the remaining blocks.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        rest: Some(text),
        pending: VecDeque::new(),
    }
}

/// Classify `text` into a block list
pub fn parse_article(text: &str) -> Vec<Block> {
    blocks(text).collect()
}

/// Iterator over the blocks of an article. See [`blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: Option<&'a str>,
    pending: VecDeque<Block>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            if let Some(block) = self.pending.pop_front() {
                return Some(block);
            }

            let rest = self.rest?;
            let chunk = match CHUNK_SEPARATOR.find(rest) {
                Some(sep) => {
                    self.rest = Some(&rest[sep.end()..]);
                    &rest[..sep.start()]
                }
                None => {
                    self.rest = None;
                    rest
                }
            };

            classify_chunk(chunk, &mut self.pending);
        }
    }
}

/// Normalize a chunk's lines, dropping the empty ones
fn chunk_lines(chunk: &str) -> Vec<String> {
    chunk
        .lines()
        .map(compact_line)
        .filter(|line| !line.is_empty())
        .collect()
}

fn classify_chunk(chunk: &str, out: &mut VecDeque<Block>) {
    let mut lines = chunk_lines(chunk);
    if lines.is_empty() {
        return;
    }

    // Tables and formulas take precedence over a heading-like first line
    if !is_table(&lines) && !is_formula(&lines) && is_heading(&lines[0]) {
        let heading = lines.remove(0);
        out.push_back(Block::Heading { text: heading });
        if lines.is_empty() {
            return;
        }
    }

    out.push_back(classify_body(lines));
}

fn classify_body(lines: Vec<String>) -> Block {
    for (applies, build) in BODY_RULES {
        if applies(&lines) {
            return build(lines);
        }
    }
    Block::Paragraph {
        text: lines.join(" "),
    }
}

fn table_block(lines: Vec<String>) -> Block {
    let rows = lines
        .iter()
        .map(|line| split_cells(line))
        .filter(|row| row.len() >= 2)
        .collect();
    Block::Table(Table::from_rows(rows))
}

fn formula_block(lines: Vec<String>) -> Block {
    Block::Formula { lines }
}

fn list_block(items: Vec<String>) -> Block {
    Block::List { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const ARTICLE: &str = "Why Positioning Beats Discounting\n\
Most agencies compete on price. The strongest brands compete on clarity.\n\
\n\
Channel | CAC | Payback\n\
--- | --- | ---\n\
Search | $120 | 4 months\n\
Paid social | $180\n\
\n\
LTV = ARPU x Gross Margin x Lifetime\n\
CAC = Spend / New Customers\n\
\n\
What to Audit First\n\
- Message-market fit\n\
- Offer architecture\n\
\n\
Awareness: reach and frequency across paid social.\n\
Consideration: engaged visits and return rate.\n\
Conversion: qualified pipeline.\n\
\n\
The brands that win treat positioning as an operating system, not a slogan.";

    #[test]
    fn test_full_article() {
        let blocks = parse_article(ARTICLE);
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "Why Positioning Beats Discounting".to_string()
                },
                Block::Paragraph {
                    text: "Most agencies compete on price. The strongest brands compete on clarity."
                        .to_string()
                },
                Block::Table(Table {
                    header: strings(&["Channel", "CAC", "Payback"]),
                    rows: vec![
                        strings(&["Search", "$120", "4 months"]),
                        strings(&["Paid social", "$180", ""]),
                    ],
                }),
                Block::Formula {
                    lines: strings(&[
                        "LTV = ARPU x Gross Margin x Lifetime",
                        "CAC = Spend / New Customers"
                    ])
                },
                Block::Heading {
                    text: "What to Audit First".to_string()
                },
                Block::List {
                    items: strings(&["- Message-market fit", "- Offer architecture"])
                },
                Block::List {
                    items: strings(&[
                        "Awareness: reach and frequency across paid social.",
                        "Consideration: engaged visits and return rate.",
                        "Conversion: qualified pipeline.",
                    ])
                },
                Block::Paragraph {
                    text: "The brands that win treat positioning as an operating system, not a slogan."
                        .to_string()
                },
            ]
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        assert_eq!(parse_article(ARTICLE), parse_article(ARTICLE));
    }

    #[test]
    fn test_simple_table() {
        let blocks = parse_article("A | B\n1 | 2\n3 | 4");
        assert_eq!(
            blocks,
            vec![Block::Table(Table {
                header: strings(&["A", "B"]),
                rows: vec![strings(&["1", "2"]), strings(&["3", "4"])],
            })]
        );
    }

    #[test]
    fn test_table_divider_is_dropped() {
        let blocks = parse_article("A | B\n--- | ---\n1 | 2\n3 | 4");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected a table, got {:?}", blocks[0]);
        };
        assert_eq!(table.header, strings(&["A", "B"]));
        assert_eq!(table.rows, vec![strings(&["1", "2"]), strings(&["3", "4"])]);
    }

    #[test]
    fn test_heading_then_paragraph() {
        let blocks = parse_article(
            "Budget Allocation Basics\nSpend follows marginal return, not last year's plan.",
        );
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "Budget Allocation Basics".to_string()
                },
                Block::Paragraph {
                    text: "Spend follows marginal return, not last year's plan.".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_lone_heading() {
        assert_eq!(
            parse_article("The Lifecycle Email Stack"),
            vec![Block::Heading {
                text: "The Lifecycle Email Stack".to_string()
            }]
        );
    }

    #[test]
    fn test_prose_fallback_joins_lines() {
        let text = "Attribution is a model, not a fact.\n  Treat it as one input   among several.\nIncrementality tests settle the argument.";
        assert_eq!(
            parse_article(text),
            vec![Block::Paragraph {
                text: "Attribution is a model, not a fact. Treat it as one input among several. Incrementality tests settle the argument."
                    .to_string()
            }]
        );
    }

    #[test]
    fn test_single_word_is_paragraph() {
        assert_eq!(
            parse_article("Summary"),
            vec![Block::Paragraph {
                text: "Summary".to_string()
            }]
        );
    }

    #[test]
    fn test_dash_rule_formula() {
        let text = "iROAS\n------------\nincremental revenue / spend";
        assert_eq!(
            parse_article(text),
            vec![Block::Formula {
                lines: strings(&["iROAS", "------------", "incremental revenue / spend"])
            }]
        );
    }

    #[test]
    fn test_heading_with_table_body() {
        let blocks = parse_article("Channel Benchmarks\nChannel | CPL\nSearch | $40");
        // A pipe-free heading line does not make the whole chunk a table
        assert_eq!(
            blocks[0],
            Block::Heading {
                text: "Channel Benchmarks".to_string()
            }
        );
        assert!(matches!(&blocks[1], Block::Table(t) if t.header == strings(&["Channel", "CPL"])));
    }

    #[test]
    fn test_whitespace_and_crlf_normalization() {
        let text = "First\u{00a0}\u{00a0}Section  Title\r\n\r\n   \r\nBody text that ends here.\r\n";
        assert_eq!(
            parse_article(text),
            vec![
                Block::Heading {
                    text: "First Section Title".to_string()
                },
                Block::Paragraph {
                    text: "Body text that ends here.".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse_article("").is_empty());
        assert!(parse_article("\n\n\n  \n\n").is_empty());
    }

    #[test]
    fn test_iterator_is_lazy_and_restartable() {
        let mut iter = blocks(ARTICLE);
        let first = iter.next().unwrap();
        assert!(matches!(first, Block::Heading { .. }));

        // Cloning mid-stream replays the same remainder
        let replay: Vec<Block> = iter.clone().collect();
        let rest: Vec<Block> = iter.collect();
        assert_eq!(replay, rest);
        assert_eq!(rest.len(), parse_article(ARTICLE).len() - 1);
    }
}
