//! HTTP API endpoints

mod health;
mod interactions;
mod materials;
mod process;
mod stats;
mod subject_configs;

pub use health::*;
pub use interactions::*;
pub use materials::*;
pub use process::*;
pub use stats::*;
pub use subject_configs::*;
