//! Shared layout components.
pub(crate) mod shell;
