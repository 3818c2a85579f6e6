//! Command implementations for the SportsWorld Central data CLI

pub mod get_data;
pub mod output;
pub mod summary;

#[cfg(test)]
mod tests;

pub use get_data::handle_get;
pub use summary::{handle_counts, handle_init};
