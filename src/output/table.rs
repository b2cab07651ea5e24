use comfy_table::Color;

use crate::core::{CategorySummary, RecordsDocument, Violation};
use crate::output::format::{
    create_styled_table, format_decimal, format_number, header_cell, right_cell, styled_cell,
};

/// Print the per-category summary of a records document
pub(crate) fn print_summary_table(
    doc: &RecordsDocument,
    summary: &[CategorySummary],
    use_color: bool,
) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Category", use_color),
        header_cell("Days", use_color),
        header_cell("Entries", use_color),
        header_cell("Avg Reps", use_color),
        header_cell("Avg Weight (kg)", use_color),
    ]);

    for row in summary {
        table.add_row(vec![
            styled_cell(&row.category, None, false),
            right_cell(&format_number(row.days), None, false),
            right_cell(&format_number(row.entries), None, false),
            right_cell(&format_decimal(row.avg_reps), None, false),
            right_cell(&format_decimal(row.avg_weight), None, false),
        ]);
    }

    let total_color = if use_color { Some(Color::Yellow) } else { None };
    table.add_row(vec![
        styled_cell("TOTAL", total_color, true),
        right_cell(&format_number(doc.records.len()), total_color, true),
        right_cell(&format_number(doc.workout_count()), total_color, true),
        right_cell("", None, false),
        right_cell("", None, false),
    ]);

    let span = match (doc.first_date(), doc.last_date()) {
        (Some(first), Some(last)) => format!("{first} → {last}"),
        _ => "no records".to_string(),
    };
    println!("\n  Workout Records ({span})\n");
    println!("{table}");
}

/// Print verification findings, one per line
pub(crate) fn print_violations(violations: &[Violation], use_color: bool) {
    for violation in violations {
        if use_color {
            println!("  \x1b[31m✗\x1b[0m {violation}");
        } else {
            println!("  ✗ {violation}");
        }
    }
}
