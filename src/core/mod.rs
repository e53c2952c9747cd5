/// Core module for header inspection
///
/// This module contains the format tag primitives, the directory scanner and
/// the error types they report.

pub mod error;
pub mod header;
pub mod scanner;
