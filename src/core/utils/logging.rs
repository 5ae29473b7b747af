//! Console Logging Macros
//!
//! In the browser: messages go to `console.log` / `console.warn`
//! Natively: arguments are still type-checked, output is discarded
//!
//! Usage:
//! ```rust
//! use shapefield_engine::console_log;
//!
//! let shapes = 15;
//! console_log!("scene built with {} shapes", shapes);
//! ```
//!
//! Never call these from per-shape, per-tick paths. One line per event.

/// Log an informational message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_are_silent_natively() {
        let count = 3;
        console_log!("shapes: {}", count);
        console_warn!("bad config: {}", "missing field");
    }
}
