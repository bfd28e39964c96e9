//! Infrastructure layer for filesystem and sandbox interactions.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
