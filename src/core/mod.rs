pub mod aggregate;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{FieldSummary, RosterSummary, Student};
pub use crate::domain::ports::{ConfigProvider, DataSource};
pub use crate::utils::error::Result;
