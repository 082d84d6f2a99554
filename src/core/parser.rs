use crate::domain::model::Student;
use crate::utils::error::Result;
use csv::StringRecord;

/// Parses raw roster text into student records.
///
/// The first non-blank record is the header and never counts as data.
/// Records with fewer than 4 fields, or with an empty first name or field,
/// are dropped silently. Only reader-level failures propagate.
pub fn parse_roster(raw: &str) -> Result<Vec<Student>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut students = Vec::new();
    let mut header_seen = false;

    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }
        if let Some(student) = student_from_record(&record) {
            students.push(student);
        }
    }

    Ok(students)
}

// A blank line surfaces as at most one whitespace-only field; a line of
// bare commas does not, and counts as a (malformed) record.
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
}

fn student_from_record(record: &StringRecord) -> Option<Student> {
    if record.len() < 4 {
        return None;
    }
    let first_name = &record[0];
    let field = &record[3];
    if first_name.is_empty() || field.is_empty() {
        return None;
    }
    Some(Student {
        first_name: first_name.to_string(),
        last_name: record[1].to_string(),
        age: record[2].to_string(),
        field: field.to_string(),
    })
}
