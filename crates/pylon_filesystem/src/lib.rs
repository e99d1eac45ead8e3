//! Provides utilities for working with source locations.

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

pub mod location;
