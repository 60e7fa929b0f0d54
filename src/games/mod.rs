//! Score sheets built on the core.
//!
//! - `tien_len`: trick-taking placement game with catches and sweeps
//! - `host`: host/banker betting game

pub(crate) mod json;

pub mod host;
pub mod tien_len;

pub use host::Host;
pub use tien_len::TienLen;
