//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data so the rules behind rendering and message handling can
//! be tested without a browser. The controller wraps these in signals.

pub mod board;
pub mod feedback;
pub mod signup;
