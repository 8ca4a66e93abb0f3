//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity board and read/write state through the
//! [`crate::controller::BoardController`] context.

pub mod activity_card;
pub mod message_area;
pub mod signup_form;
