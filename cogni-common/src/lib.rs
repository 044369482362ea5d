//! # CogniGrasp Common Library
//!
//! Shared code for the CogniGrasp study processor including:
//! - Subject classification (keyword rule table)
//! - Subject configuration store (seeded catalog, general fallback)
//! - Content synthesis (template plus random phrasing variation)
//! - Spaced-repetition review scheduling
//! - Usage analytics aggregation
//! - Database schema bootstrap and shared models

pub mod db;
pub mod error;
pub mod process;
pub mod schedule;
pub mod stats;
pub mod subject;
pub mod synthesis;
pub mod time;

pub use error::{Error, Result};
pub use subject::SubjectTag;
