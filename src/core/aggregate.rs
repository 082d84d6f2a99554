use crate::domain::model::{FieldSummary, RosterSummary, Student};

/// Folds a roster into per-field counts and name lists.
///
/// Fields appear in the order they are first encountered; names keep
/// arrival order and duplicates. Deterministic for a given roster, and an
/// empty roster yields an empty summary.
pub fn summarize(roster: &[Student]) -> RosterSummary {
    roster
        .iter()
        .fold(RosterSummary::default(), |mut summary, student| {
            match summary
                .fields
                .iter_mut()
                .find(|entry| entry.field == student.field)
            {
                Some(entry) => {
                    entry.count += 1;
                    entry.first_names.push(student.first_name.clone());
                }
                None => summary.fields.push(FieldSummary {
                    field: student.field.clone(),
                    count: 1,
                    first_names: vec![student.first_name.clone()],
                }),
            }
            summary.total_students += 1;
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first_name: &str, field: &str) -> Student {
        Student {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            age: "21".to_string(),
            field: field.to_string(),
        }
    }

    #[test]
    fn test_summarize_groups_by_field() {
        let roster = vec![
            student("Johann", "CS"),
            student("Guillaume", "SWE"),
            student("Arielle", "CS"),
        ];

        let summary = summarize(&roster);

        assert_eq!(summary.total_students, 3);
        assert_eq!(summary.fields.len(), 2);
        assert_eq!(summary.fields[0].field, "CS");
        assert_eq!(summary.fields[0].count, 2);
        assert_eq!(summary.fields[0].first_names, vec!["Johann", "Arielle"]);
        assert_eq!(summary.fields[1].field, "SWE");
        assert_eq!(summary.fields[1].first_names, vec!["Guillaume"]);
    }

    #[test]
    fn test_field_order_is_first_appearance() {
        // "SWE" sorts after "CS" but was seen first, so it must stay first.
        let roster = vec![
            student("Guillaume", "SWE"),
            student("Johann", "CS"),
            student("Arielle", "SWE"),
        ];

        let summary = summarize(&roster);

        assert_eq!(summary.fields[0].field, "SWE");
        assert_eq!(summary.fields[1].field, "CS");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let roster = vec![student("Johann", "CS"), student("Johann", "CS")];

        let summary = summarize(&roster);

        assert_eq!(summary.total_students, 2);
        assert_eq!(summary.fields[0].count, 2);
        assert_eq!(summary.fields[0].first_names, vec!["Johann", "Johann"]);
    }

    #[test]
    fn test_empty_roster() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_students, 0);
        assert!(summary.fields.is_empty());
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let roster = vec![
            student("Johann", "CS"),
            student("Guillaume", "SWE"),
            student("Arielle", "CS"),
        ];

        assert_eq!(summarize(&roster), summarize(&roster));
    }

    #[test]
    fn test_total_equals_sum_of_counts() {
        let roster = vec![
            student("Johann", "CS"),
            student("Guillaume", "SWE"),
            student("Arielle", "CS"),
            student("Pierre", "Maths"),
        ];

        let summary = summarize(&roster);
        let sum: usize = summary.fields.iter().map(|entry| entry.count).sum();
        assert_eq!(summary.total_students, sum);
    }
}
