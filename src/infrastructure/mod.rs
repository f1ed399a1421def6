//! Infrastructure utilities tied to the Zellij plugin sandbox.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
