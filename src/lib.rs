pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{cli::FileSource, CliConfig};
pub use core::pipeline::{count_students_from_path, RosterPipeline};
pub use server::{serve, spawn, RosterService};
pub use utils::error::{Result, RosterError};
