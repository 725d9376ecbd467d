//! CLI operation mode handlers.
//!
//! This module contains the implementations for the different operation modes:
//! - [`history`]: Print the review history
//! - [`analysis`]: Print analysis and statistics for one title
//! - [`stream`]: Follow the live analysis stream for one title
//!
//! Output formatting utilities are in [`output`].

pub mod analysis;
pub mod history;
pub mod output;
pub mod stream;

#[cfg(test)]
pub mod test_utils;
