//! Core, DOM-free primitives and helpers for the Web UI.
pub mod routes;
pub mod theme;
