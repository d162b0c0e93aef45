//! Shared helpers used across domain modules.

mod null_default;

pub use null_default::{
    null_as_default, null_elements_as_default, optional_null_elements_as_default,
};
