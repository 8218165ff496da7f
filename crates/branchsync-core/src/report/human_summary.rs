//! Human-readable summary renderer for a comparison.

use crate::report::summary::DiffSummary;

/// Render the console summary of a comparison.
///
/// Informational only; the structured change list is the source of truth.
pub fn render_human_summary(summary: &DiffSummary) -> String {
    let mut out = String::new();
    out.push_str("Comparison completed successfully.\n");
    out.push_str(&format!("Added branches: {}\n", summary.added_branches));
    out.push_str(&format!("Deleted branches: {}\n", summary.deleted_branches));
    out.push_str(&format!("Modified branches: {}\n", summary.modified_branches));
    out.push_str(&format!(
        "Total field modifications: {}\n",
        summary.modified_fields
    ));
    if summary.is_empty() {
        out.push_str("No changes detected.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_counts() {
        let text = render_human_summary(&DiffSummary {
            added_branches: 1,
            deleted_branches: 2,
            modified_branches: 3,
            modified_fields: 4,
        });
        assert!(text.contains("Added branches: 1\n"));
        assert!(text.contains("Deleted branches: 2\n"));
        assert!(text.contains("Modified branches: 3\n"));
        assert!(text.contains("Total field modifications: 4\n"));
        assert!(!text.contains("No changes detected."));
    }

    #[test]
    fn test_render_no_changes() {
        let text = render_human_summary(&DiffSummary::default());
        assert!(text.ends_with("No changes detected.\n"));
    }
}
