//! Timestamp utilities
//!
//! All stamping flows through [`now`] so request handlers can capture a
//! single instant and pass it down; core functions never read the clock
//! themselves.

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
