//! Catalog access: album and track lists from static manifests or directory
//! listings.

mod catalog;
mod fetch;
mod listing;
mod manifest;
pub mod models;
#[cfg(test)]
pub mod testing;

pub use catalog::*;
pub use fetch::*;
pub use models::*;
