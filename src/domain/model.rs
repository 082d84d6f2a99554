use serde::Serialize;

/// One student record parsed from the roster database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub field: String,
}

/// Per-field aggregate: how many students picked the field, and who.
/// Names keep arrival order; duplicates stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub field: String,
    pub count: usize,
    pub first_names: Vec<String>,
}

/// Aggregation over one roster read. `fields` preserves the order in which
/// each field was first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total_students: usize,
    pub fields: Vec<FieldSummary>,
}
