//! HTTP protocol types

mod method;

pub use method::{infer, Method};
