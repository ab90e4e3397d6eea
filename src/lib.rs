//! Filter configuration and derivation for property search: which facets
//! apply, which are active, the chips that summarise them, and saved searches.

pub mod config;
pub mod db;
pub mod errors;
pub mod filters;
pub mod responses;
pub mod router;
pub mod saved;
pub mod templates;

#[cfg(test)]
mod tests;
