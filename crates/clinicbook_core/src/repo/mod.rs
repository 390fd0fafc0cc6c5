//! Record collection contracts and the in-memory clinic book.
//!
//! # Responsibility
//! - Define the collection operations commands are written against.
//! - Keep uniqueness and filtered-view state behind that contract.
//!
//! # Invariants
//! - Collection writes enforce `Record::is_same_entity` uniqueness.
//! - Positional indices always resolve against the filtered view.

pub mod clinic_book;
pub mod record_store;
