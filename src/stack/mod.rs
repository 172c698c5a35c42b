//! Ordered stack module
//!
//! Identifier-keyed LIFO storage backing the navigation history.

pub mod id_stack;

pub use id_stack::IdStack;
