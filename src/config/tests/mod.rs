//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `cli_loading`: Flags and environment variables through `load_from_iter`
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `validation`: Conversion into client settings

mod helpers;
mod operation_mode;
mod precedence;
