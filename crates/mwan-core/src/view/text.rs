//! Plain-text terminal layout of the display tree.
//!
//! Headings are underlined and tables are drawn with box characters. Inline
//! styling is emitted as ANSI escapes only when color is enabled.

use crate::view::node::{Element, Node};

/// Widest a table cell may get before it is truncated.
pub const MAX_CELL_WIDTH: usize = 40;

const RESET: &str = "\x1B[0m";
const BOLD: &str = "\x1B[1m";
const ITALIC: &str = "\x1B[3m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    pub color: bool,
}

/// Serialize a tree to terminal text, one trailing newline included.
pub fn to_text(node: &Node, options: &TextOptions) -> String {
    let mut lines = Vec::new();
    block(node, options, &mut lines);

    while lines.last().is_some_and(|line: &String| line.is_empty()) {
        lines.pop();
    }
    let start = lines.iter().take_while(|line| line.is_empty()).count();

    let mut out = lines[start..].join("\n");
    out.push('\n');
    out
}

fn is_block(tag: &str) -> bool {
    matches!(tag, "div" | "h2" | "h3" | "p" | "table")
}

fn blank_line(lines: &mut Vec<String>) {
    if lines.last().is_some_and(|line| !line.is_empty()) {
        lines.push(String::new());
    }
}

fn block(node: &Node, options: &TextOptions, lines: &mut Vec<String>) {
    let element = match node {
        Node::Text(text) => {
            if !text.trim().is_empty() {
                lines.push(text.clone());
            }
            return;
        }
        Node::Element(element) => element,
    };

    match element.tag {
        "h2" => {
            let title = element.text_content();
            lines.push(styled(&title, BOLD, options));
            lines.push("═".repeat(title.chars().count()));
            lines.push(String::new());
        }
        "h3" => {
            let title = element.text_content();
            blank_line(lines);
            lines.push(styled(&title, BOLD, options));
            lines.push("─".repeat(title.chars().count()));
        }
        "table" => table(element, options, lines),
        "div" if element.has_class("alert-message") => {
            let mut panel = Vec::new();
            for child in &element.children {
                block(child, options, &mut panel);
            }
            blank_line(lines);
            lines.extend(panel.into_iter().map(|line| format!("! {}", line)));
        }
        _ if element.child_elements().any(|child| is_block(child.tag)) => {
            if element.has_class("cbi-section") {
                blank_line(lines);
            }
            for child in &element.children {
                block(child, options, lines);
            }
        }
        _ => {
            if element.has_class("cbi-section") {
                blank_line(lines);
            }
            let text = inline(node, options);
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }
}

fn styled(text: &str, style: &str, options: &TextOptions) -> String {
    if options.color {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

fn tone_escape(tone: &str) -> Option<&'static str> {
    match tone {
        "green" => Some("\x1B[32m"),
        "red" => Some("\x1B[31m"),
        "orange" => Some("\x1B[33m"),
        "gray" => Some("\x1B[90m"),
        _ => None,
    }
}

fn inline(node: &Node, options: &TextOptions) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Element(element) => inline_element(element, options),
    }
}

fn inline_element(element: &Element, options: &TextOptions) -> String {
    let content: String = element
        .children
        .iter()
        .map(|child| inline(child, options))
        .collect();

    match element.tag {
        "strong" => styled(&content, BOLD, options),
        "em" => styled(&content, ITALIC, options),
        "span" => match element.attr("data-tone").and_then(tone_escape) {
            Some(color) => {
                let bold = element.attr("style").is_some_and(|s| s.contains("bold"));
                let style = if bold {
                    format!("{}{}", color, BOLD)
                } else {
                    color.to_string()
                };
                styled(&content, &style, options)
            }
            None => content,
        },
        _ => content,
    }
}

/// One rendered cell: display width and the text to print.
struct Cell {
    width: usize,
    text: String,
}

impl Cell {
    fn new(element: &Element, options: &TextOptions) -> Self {
        let plain = element.text_content();
        let width = plain.chars().count();
        if width > MAX_CELL_WIDTH {
            let text = truncate(&plain, MAX_CELL_WIDTH);
            return Cell {
                width: text.chars().count(),
                text,
            };
        }

        Cell {
            width,
            text: inline_element(element, options),
        }
    }
}

fn table(element: &Element, options: &TextOptions, lines: &mut Vec<String>) {
    let rows: Vec<(bool, Vec<Cell>)> = element
        .child_elements()
        .filter(|row| row.tag == "tr")
        .map(|row| {
            let cells: Vec<&Element> = row
                .child_elements()
                .filter(|cell| matches!(cell.tag, "td" | "th"))
                .collect();
            let is_header = !cells.is_empty() && cells.iter().all(|cell| cell.tag == "th");
            (
                is_header,
                cells.into_iter().map(|cell| Cell::new(cell, options)).collect(),
            )
        })
        .collect();

    let columns = rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
    if columns == 0 {
        return;
    }

    let mut widths = vec![0usize; columns];
    for (_, cells) in &rows {
        for (index, cell) in cells.iter().enumerate() {
            widths[index] = widths[index].max(cell.width);
        }
    }

    lines.push(border(&widths, '┌', '┬', '┐'));
    let mut previous_header = false;
    for (row_index, (is_header, cells)) in rows.iter().enumerate() {
        if row_index > 0 && previous_header && !is_header {
            lines.push(border(&widths, '├', '┼', '┤'));
        }
        lines.push(row(&widths, cells));
        previous_header = *is_header;
    }
    lines.push(border(&widths, '└', '┴', '┘'));
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}

fn row(widths: &[usize], cells: &[Cell]) -> String {
    let mut out = String::from("│");
    for (index, width) in widths.iter().enumerate() {
        let (text, used) = cells
            .get(index)
            .map_or(("", 0), |cell| (cell.text.as_str(), cell.width));
        out.push(' ');
        out.push_str(text);
        out.push_str(&" ".repeat(width - used));
        out.push_str(" │");
    }
    out
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including multi-byte status symbols.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
