//! HTML rendering for article blocks

use super::formatter::ArticleFormatter;
use bergs_domain::{Block, Table};
use html_escape::encode_text;

/// Renders each block as one HTML element, separated by newlines
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn block(block: &Block) -> String {
        match block {
            Block::Heading { text } => format!("<h2>{}</h2>", encode_text(text)),
            Block::Paragraph { text } => format!("<p>{}</p>", encode_text(text)),
            Block::List { .. } => {
                let items: String = block
                    .list_items()
                    .unwrap_or_default()
                    .iter()
                    .map(|item| match &item.label {
                        Some(label) => format!(
                            "<li><strong>{}:</strong> {}</li>",
                            encode_text(label),
                            encode_text(&item.text)
                        ),
                        None => format!("<li>{}</li>", encode_text(&item.text)),
                    })
                    .collect();
                format!("<ul>{}</ul>", items)
            }
            Block::Formula { lines } => format!("<pre>{}</pre>", encode_text(&lines.join("\n"))),
            Block::Table(table) => Self::table(table),
        }
    }

    fn table(table: &Table) -> String {
        let header: String = table
            .header
            .iter()
            .map(|cell| format!("<th>{}</th>", encode_text(cell)))
            .collect();

        let body: String = table
            .rows
            .iter()
            .map(|row| {
                let cells: String = row
                    .iter()
                    .map(|cell| format!("<td>{}</td>", encode_text(cell)))
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect();

        format!(
            "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
            header, body
        )
    }
}

impl ArticleFormatter for HtmlFormatter {
    fn format(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(Self::block)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
