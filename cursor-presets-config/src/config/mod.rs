//! Application configuration.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: the `Config` struct and its `Default` impl
//! - [`persistence`]: `impl Config` methods for load/save and path resolution

pub mod config_struct;
pub mod persistence;

pub use config_struct::Config;
