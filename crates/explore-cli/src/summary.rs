//! Terminal and JSON rendering of decoded explore URLs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use serde::Serialize;

use explore_model::{DateRangeSelector, ExploreDefaults, ExploreState, QcBounds};
use explore_url::{ExploreUrl, Location};

/// Label and rendered value of each state slice, in display order.
pub fn state_rows(state: &ExploreState) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Location", state.location.display_name()),
        ("Sampling strategy", state.sampling_strategy.to_string()),
        ("Date range", date_range_text(&state.date_range)),
        ("Analysis mode", state.analysis_mode.to_string()),
        ("Host", state.host.hosts().join(", ")),
    ];
    if state.qc.is_empty() {
        rows.push(("QC", "-".to_string()));
    }
    for (metric, bounds) in state.qc.iter() {
        rows.push(("QC", format!("{}: {}", metric.label(), bounds_text(bounds))));
    }
    if let Some(variant) = &state.variant {
        rows.push(("Variant", variant.display_name()));
    }
    for (index, variant) in state.variants.iter().flatten().enumerate() {
        rows.push(("Compared", format!("{index}: {}", variant.display_name())));
    }
    rows
}

/// Label and value of each configured default.
pub fn defaults_rows(defaults: &ExploreDefaults) -> Vec<(&'static str, String)> {
    vec![
        ("Location", defaults.location.display_name()),
        ("Sampling strategy", defaults.sampling_strategy.to_string()),
        ("Date range", date_range_text(&defaults.date_range)),
        ("Analysis mode", defaults.analysis_mode.to_string()),
        ("Host", defaults.host.hosts().join(", ")),
    ]
}

/// Links derived from a decoded URL.
pub fn link_rows(url: &ExploreUrl) -> Vec<(&'static str, String)> {
    vec![
        ("Explore page", url.explore_page_url()),
        ("Overview page", url.overview_page_url()),
        ("Focus key", url.focus_key()),
    ]
}

pub fn print_rows(title: &str, rows: &[(&'static str, String)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Value")]);
    apply_table_style(&mut table);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_history(entries: &[Location], current: usize) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Location")]);
    apply_table_style(&mut table);
    for (index, entry) in entries.iter().enumerate() {
        let marker = if index == current {
            Cell::new(format!("{index} *")).fg(Color::Green)
        } else {
            Cell::new(index).fg(Color::DarkGrey)
        };
        table.add_row(vec![marker, Cell::new(entry)]);
    }
    println!("{table}");
}

/// Machine readable result of `explore decode --json`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DecodeReport<'a> {
    #[serde(rename_all = "camelCase")]
    Valid {
        location: String,
        state: &'a ExploreState,
        explore_page_url: String,
        overview_page_url: String,
    },
    Redirect {
        location: String,
        target: String,
    },
    NoMatch {
        location: String,
    },
}

impl<'a> DecodeReport<'a> {
    pub fn valid(url: &'a ExploreUrl) -> Self {
        Self::Valid {
            location: url.location().to_string(),
            state: &url.state,
            explore_page_url: url.explore_page_url(),
            overview_page_url: url.overview_page_url(),
        }
    }
}

fn date_range_text(date_range: &DateRangeSelector) -> String {
    match date_range {
        DateRangeSelector::Preset(preset) => preset.label().to_string(),
        DateRangeSelector::Explicit { from, to } => format!("{from} to {to}"),
    }
}

fn bounds_text(bounds: QcBounds) -> String {
    match (bounds.from, bounds.to) {
        (Some(from), Some(to)) => format!("{from} to {to}"),
        (Some(from), None) => format!("at least {from}"),
        (None, Some(to)) => format!("at most {to}"),
        (None, None) => "-".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120)
        .set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(80)),
        ]);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
