//! Driven adapters for external dependencies.

pub mod persistence;
