//! Database queries owned by the service layer
//!
//! Schema and the subject config store live in cogni-common; this module
//! adds the material and interaction queries plus first-run demo seeding.

pub mod interactions;
pub mod materials;
pub mod seed;
