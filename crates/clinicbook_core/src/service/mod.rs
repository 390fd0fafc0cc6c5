//! Use-case services.
//!
//! # Responsibility
//! - Turn one line of user input into a parsed, executed command.
//! - Keep the CLI decoupled from parser and store details.

pub mod clinic_service;
