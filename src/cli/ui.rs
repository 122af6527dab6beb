use crate::core::badge::Badge;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Subtitle,
    Label,
    Value,
    Error,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Subtitle => style(text).bold(),
        StyleType::Label => style(text).cyan(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn badge_color(badge: Badge) -> Color {
    match badge {
        Badge::Success => Color::Green,
        Badge::Warning => Color::Yellow,
        Badge::Danger => Color::Red,
        Badge::Info => Color::Blue,
        Badge::Secondary => Color::DarkGrey,
    }
}

/// A cell rendered the way the badge would be coloured on screen.
pub fn badge_cell(text: &str, badge: Badge) -> Cell {
    Cell::new(text)
        .fg(badge_color(badge))
        .add_attribute(Attribute::Bold)
}

pub fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Two-column label/value table used for headline figures.
pub fn key_value_table<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> Table {
    let mut table = new_styled_table();
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).fg(Color::Cyan),
            Cell::new(value).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Section heading followed by a dimmed one-line description.
pub fn section(title: &str, subtitle: &str) -> String {
    format!(
        "{}\n{}\n",
        style_text(title, StyleType::Subtitle),
        style_text(subtitle, StyleType::Subtle)
    )
}

/// Creates a spinner shown while a one-shot command waits on the provider.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Clears the terminal before a live view redraws.
pub fn clear_screen() {
    let term = console::Term::stdout();
    if term.is_term() {
        let _ = term.clear_screen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_colors() {
        assert_eq!(badge_color(Badge::Success), Color::Green);
        assert_eq!(badge_color(Badge::Warning), Color::Yellow);
        assert_eq!(badge_color(Badge::Danger), Color::Red);
        assert_eq!(badge_color(Badge::Secondary), Color::DarkGrey);
    }

    #[test]
    fn test_key_value_table_keeps_row_order() {
        let table = key_value_table([("First", "1".to_string()), ("Second", "2".to_string())]);
        let rendered = table.to_string();
        let first = rendered.find("First").unwrap();
        let second = rendered.find("Second").unwrap();
        assert!(first < second);
    }
}
