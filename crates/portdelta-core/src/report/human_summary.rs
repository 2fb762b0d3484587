//! Human-readable summary renderer for comparison and range results.

use crate::model::{ChangeSummary, ChangeType, ComparisonResult, RangeResult};

/// Render a plain-text report of a single comparison.
///
/// Layout: the shared header and counters, then one section per non-empty
/// change type listing each security in ISIN order.
pub fn render_comparison_summary(result: &ComparisonResult) -> String {
    let mut out = header(&result.start_month, &result.end_month, &result.summary);

    for change_type in ChangeType::ALL {
        let mut entries = result.changes_of_type(change_type).peekable();
        if entries.peek().is_none() {
            continue;
        }

        out.push_str(&format!("\n{}:\n", change_type.label()));
        for (isin, entry) in entries {
            out.push_str(&format!(
                "  - {} ({}): ₹{} Lakhs ({})\n",
                entry.name,
                isin,
                format_lakhs(entry.change.value_change()),
                format_percentage(entry.change.percentage_change()),
            ));
        }
    }

    out
}

/// Render a plain-text report of a range analysis.
///
/// Layout: the shared header and aggregate counters, then one line per
/// compared month pair and, if any, the skipped pairs.
pub fn render_range_summary(result: &RangeResult) -> String {
    let mut out = header(&result.start_month, &result.end_month, &result.summary);

    if !result.monthly_changes.is_empty() {
        out.push_str("\nMonthly Changes:\n");
        for month in &result.monthly_changes {
            let s = &month.summary;
            out.push_str(&format!(
                "  {} -> {}: {} new, {} exits, {} increased, {} decreased, {} unchanged, ₹{} Lakhs\n",
                month.start_month,
                month.end_month,
                s.new_entries,
                s.exits,
                s.increases,
                s.decreases,
                s.no_change,
                format_lakhs(s.total_value_change),
            ));
        }
    }

    if !result.skipped_pairs.is_empty() {
        out.push_str("\nSkipped Pairs:\n");
        for pair in &result.skipped_pairs {
            out.push_str(&format!(
                "  {} -> {}: {}\n",
                pair.start_month, pair.end_month, pair.message
            ));
        }
    }

    out
}

fn header(start_month: &str, end_month: &str, summary: &ChangeSummary) -> String {
    let mut out = String::from("=== Portfolio Analysis Report ===\n");
    out.push_str(&format!("Period: {start_month} to {end_month}\n"));
    out.push_str("\nSummary:\n");
    for change_type in ChangeType::ALL {
        out.push_str(&format!(
            "{}: {}\n",
            change_type.label(),
            summary.count(change_type)
        ));
    }
    out.push_str(&format!(
        "Total Value Change: ₹{} Lakhs\n",
        format_lakhs(summary.total_value_change)
    ));
    out
}

/// Format an amount with two decimals and `,` thousands separators,
/// e.g. `-1234567.891` → `-1,234,567.89`
pub fn format_lakhs(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Signed percentage with two decimals; infinite values render as `+inf%`
/// or `-inf%`
pub fn format_percentage(pct: f64) -> String {
    format!("{pct:+.2}%")
}
