//! Text rendering of loaded pages.
//!
//! Everything here is pure: a [`Page`] plus display settings goes in, Discord
//! markdown comes out. Tables and charts are drawn inside code blocks so the
//! columns line up in a monospace font.

use crate::{
    config::DisplayConfig,
    core::{Table, claim::ClaimChoices},
    dashboard::page::{Content, Page, Widget},
    errors::ErrorKind,
};
use std::fmt::Write;

/// Longest message Discord accepts.
pub const MESSAGE_LIMIT: usize = 2000;

const FENCE: &str = "```";

/// What the user sees when a widget or action fails.
#[must_use]
pub const fn error_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Connectivity => "Database error occurred.",
        ErrorKind::IntegrityViolation => "Cannot enter duplicate values, Values already present!",
        ErrorKind::Unknown => "An unexpected exception occurred.",
    }
}

/// Formats an integer with thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Draws a table, showing at most `max_rows` rows.
#[must_use]
pub fn render_table(table: &Table, max_rows: usize) -> String {
    if table.is_empty() {
        return "_No rows._".to_string();
    }

    let shown: Vec<Vec<String>> = table
        .rows
        .iter()
        .take(max_rows)
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            shown
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{FENCE}");
    let _ = writeln!(out, "{}", line(&table.columns));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
    );
    for row in &shown {
        let _ = writeln!(out, "{}", line(row));
    }
    out.push_str(FENCE);

    let hidden = table.len().saturating_sub(max_rows);
    if hidden > 0 {
        let _ = write!(out, "\n… {hidden} more rows");
    }
    out
}

/// Computes how many bar characters `value` gets when `max` fills `width`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    // Ratio is clamped to [0, 1] and width is small, so the cast cannot overflow
    ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Draws a horizontal bar chart, longest bar `width` characters.
#[must_use]
pub fn render_bar_chart(series: &[(String, f64)], width: usize) -> String {
    if series.is_empty() {
        return "_No data._".to_string();
    }
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_width = series.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{FENCE}");
    for (label, value) in series {
        let _ = writeln!(
            out,
            "{} {} {}",
            pad(label, label_width),
            "█".repeat(bar_length(*value, max, width)),
            format_value(*value)
        );
    }
    out.push_str(FENCE);
    out
}

/// Draws a share-of-total chart: every slice as a bar scaled to 100% plus its
/// percentage of the series total.
#[must_use]
pub fn render_pie_chart(series: &[(String, f64)], width: usize) -> String {
    let total: f64 = series.iter().map(|(_, v)| v.max(0.0)).sum();
    if series.is_empty() || total <= 0.0 {
        return "_No data._".to_string();
    }
    let label_width = series.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{FENCE}");
    for (label, value) in series {
        let share = value.max(0.0) / total * 100.0;
        let filled = bar_length(share, 100.0, width);
        let _ = writeln!(
            out,
            "{} {}{} {share:5.1}% ({})",
            pad(label, label_width),
            "█".repeat(filled),
            "░".repeat(width.saturating_sub(filled)),
            format_value(*value)
        );
    }
    out.push_str(FENCE);
    out
}

/// Lists the values a claim form may use.
#[must_use]
pub fn render_choices(choices: &ClaimChoices) -> String {
    let join = |ids: &[i64]| {
        if ids.is_empty() {
            "none".to_string()
        } else {
            ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        }
    };
    format!(
        "Food IDs: {}\nReceiver IDs: {}\nStatuses: {}",
        join(&choices.food_ids),
        join(&choices.receiver_ids),
        choices.statuses.join(", ")
    )
}

/// Renders one widget: bold title, then its content or error message.
#[must_use]
pub fn render_widget(widget: &Widget, display: &DisplayConfig) -> String {
    let body = match &widget.content {
        Ok(Content::Card(value)) => format!("**{}**", format_thousands(*value)),
        Ok(Content::Table(table)) => render_table(table, display.max_table_rows),
        Ok(Content::BarChart(series)) => render_bar_chart(series, display.bar_width),
        Ok(Content::PieChart(series)) => render_pie_chart(series, display.bar_width),
        Ok(Content::Choices(choices)) => render_choices(choices),
        Err(e) => format!("⚠️ {}", error_message(e.kind())),
    };
    format!("**{}**\n{body}", widget.title)
}

/// Renders a whole page as a heading block followed by one block per widget.
#[must_use]
pub fn render_page(page: &Page, display: &DisplayConfig) -> Vec<String> {
    std::iter::once(format!("## {}", page.section.heading()))
        .chain(page.widgets.iter().map(|w| render_widget(w, display)))
        .collect()
}

fn split_oversized(block: &str, limit: usize) -> Vec<String> {
    // Room for a closing and a reopening fence
    let budget = limit.saturating_sub(2 * (FENCE.len() + 1)).max(1);
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut in_fence = false;

    for line in block.lines() {
        let line: String = line.chars().take(budget).collect();
        if !current.is_empty() && current.chars().count() + line.chars().count() + 1 > budget {
            if in_fence {
                current.push_str(FENCE);
            }
            pieces.push(std::mem::take(&mut current));
            if in_fence {
                current.push_str(FENCE);
                current.push('\n');
            }
        }
        if line.starts_with(FENCE) {
            in_fence = !in_fence;
        }
        current.push_str(&line);
        current.push('\n');
    }
    let last = current.trim_end().to_string();
    if !last.is_empty() {
        pieces.push(last);
    }
    pieces
        .into_iter()
        .map(|p| p.trim_end().to_string())
        .collect()
}

/// Packs blocks into as few messages as possible, each at most `limit` characters.
///
/// Blocks are never merged mid-way; a block longer than `limit` is split on
/// line boundaries, closing and reopening code fences around the cut.
#[must_use]
pub fn chunk_messages(blocks: &[String], limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();

    for block in blocks {
        let pieces = if block.chars().count() > limit {
            split_oversized(block, limit)
        } else {
            vec![block.clone()]
        };
        for piece in pieces {
            let needed = piece.chars().count() + usize::from(!current.is_empty());
            if !current.is_empty() && current.chars().count() + needed > limit {
                messages.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(&piece);
        }
    }
    if !current.is_empty() {
        messages.push(current);
    }
    messages
}
