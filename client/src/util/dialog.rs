//! Browser confirmation prompt.
//!
//! Requires a browser environment; outside of one every prompt is treated as
//! declined so no mutation can fire during SSR.

/// Show a native yes/no prompt and return whether the user accepted.
pub fn confirm(prompt: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        false
    }
}
