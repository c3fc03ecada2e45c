//! Routed view slices.
//!
//! # Design
//! - One component per route table row, plus the router fallback.
//! - Views render their frame only; data and state belong to their own slices.

pub(crate) mod views;
