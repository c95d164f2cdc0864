//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files the player and
//! the simulation consume:
//! - Player tuning (data-driven via TOML or RON)
//! - Course layouts (data-driven via RON)
//!
//! All loaders use platformer-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, Course, CourseLoader, LoadResult};
