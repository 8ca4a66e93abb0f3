//! Routed pages.

pub mod activities;
