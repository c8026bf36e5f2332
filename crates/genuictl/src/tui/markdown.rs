//! Markdown - Minimal styling for the static answers
//!
//! Handles only what the example answers use: `##`/`###` headings, `>`
//! quotes, list items, table rows and `**bold**` spans. Everything else is
//! shown verbatim, which is the point of the left-hand panel.

use genui_common::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::utils::color;

pub fn markdown_lines(markdown: &str, palette: &Palette) -> Vec<Line<'static>> {
    let body = Style::default().fg(color(palette.foreground));
    let muted = Style::default().fg(color(palette.muted));

    markdown
        .lines()
        .map(|raw| {
            if let Some(title) = raw.strip_prefix("## ") {
                Line::from(Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(color(palette.primary))
                        .add_modifier(Modifier::BOLD),
                ))
            } else if let Some(title) = raw.strip_prefix("### ") {
                Line::from(Span::styled(
                    title.to_string(),
                    body.add_modifier(Modifier::BOLD),
                ))
            } else if let Some(quote) = raw.strip_prefix("> ") {
                Line::from(vec![
                    Span::styled("│ ", muted),
                    Span::styled(quote.to_string(), muted.add_modifier(Modifier::ITALIC)),
                ])
            } else if let Some(item) = raw.strip_prefix("- ") {
                let mut spans = vec![Span::styled("• ", Style::default().fg(color(palette.primary)))];
                spans.extend(inline_spans(item, body));
                Line::from(spans)
            } else if raw.starts_with('|') {
                Line::from(Span::styled(raw.to_string(), muted))
            } else {
                Line::from(inline_spans(raw, body))
            }
        })
        .collect()
}

/// Split on `**` and bold every odd segment
fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let style = if i % 2 == 1 {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(part.to_string(), style)
        })
        .collect()
}
