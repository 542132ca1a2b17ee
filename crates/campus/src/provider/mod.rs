//! Campus reference data providers.

mod csuf;
pub mod static_provider;

pub use static_provider::StaticCampusProvider;
