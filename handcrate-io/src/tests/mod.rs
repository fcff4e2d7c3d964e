//! Test modules for handcrate-io
//!
//! Session parsing, error reporting and write/read agreement.

pub mod session_tests;
