use crate::domain::model::RosterSummary;

/// Renders the plain-text roster report: a total line followed by one line
/// per field in first-appearance order.
pub fn render_report(summary: &RosterSummary) -> String {
    let mut lines = Vec::with_capacity(summary.fields.len() + 1);
    lines.push(format!("Number of students: {}", summary.total_students));

    for entry in &summary.fields {
        lines.push(format!(
            "Number of students in {}: {}. List: {}",
            entry.field,
            entry.count,
            entry.first_names.join(", ")
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldSummary;

    #[test]
    fn test_render_sample_report() {
        let summary = RosterSummary {
            total_students: 3,
            fields: vec![
                FieldSummary {
                    field: "CS".to_string(),
                    count: 2,
                    first_names: vec!["Johann".to_string(), "Arielle".to_string()],
                },
                FieldSummary {
                    field: "SWE".to_string(),
                    count: 1,
                    first_names: vec!["Guillaume".to_string()],
                },
            ],
        };

        let report = render_report(&summary);

        assert_eq!(
            report,
            "Number of students: 3\n\
             Number of students in CS: 2. List: Johann, Arielle\n\
             Number of students in SWE: 1. List: Guillaume"
        );
    }

    #[test]
    fn test_render_empty_summary() {
        let report = render_report(&RosterSummary::default());
        assert_eq!(report, "Number of students: 0");
    }
}
