//! Repository implementations for database access
//!
//! Every statement is parameterized; writes are single statements or a
//! lookup followed by one mutation, never multi-row partial commits.

pub mod todos;

pub use todos::{DbError, Todo, TodoRepo, TodoRow};
