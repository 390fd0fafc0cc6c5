//! Domain model for clinic records.
//!
//! # Responsibility
//! - Define validated field types and the immutable person/appointment
//!   records built from them.
//! - Define edit descriptors and the pure merge that applies them.
//!
//! # Invariants
//! - Records are never mutated in place by edits; a merge yields a new value.
//! - Duplicate detection uses `Record::is_same_entity`, not `==`.

pub mod appointment;
pub mod descriptor;
pub mod fields;
pub mod person;
pub mod record;
