//! Preference catalog display formatting
//!
//! Formats the three option lists as tables for the `options` subcommand.

use tabled::{Table, Tabled};

use crate::models::{PreferenceKind, PreferenceOption};

/// Table row for a preference option
#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Icon")]
    icon: &'static str,
}

impl From<&PreferenceOption> for OptionRow {
    fn from(option: &PreferenceOption) -> Self {
        Self {
            id: option.id,
            label: option.label,
            icon: option.icon.map(|i| i.glyph()).unwrap_or("-"),
        }
    }
}

/// Format one option list as a table
pub fn format_options(kind: PreferenceKind) -> String {
    let rows: Vec<OptionRow> = kind.options().iter().map(OptionRow::from).collect();
    Table::new(rows).to_string()
}

/// Format the whole preference catalog
pub fn format_catalog() -> String {
    let mut output = String::new();

    for (i, kind) in PreferenceKind::ALL.iter().enumerate() {
        let mode = if kind.is_multi() {
            "multi-select"
        } else {
            "single-select"
        };
        output.push_str(&format!("{} ({})\n", kind.title(), mode));
        output.push_str(&format_options(*kind));
        output.push('\n');

        if i < PreferenceKind::ALL.len() - 1 {
            output.push('\n');
        }
    }

    output
}
