/// Utility modules for the patcher
///
/// File discovery and output formatting.

pub mod file_utils;
pub mod output_formatter;
