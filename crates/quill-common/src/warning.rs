//! Style-pipeline warnings with colored terminal output.
//!
//! Provides deduplication so that a stylesheet repeating the same unsupported
//! construct hundreds of times produces a single line of output. Used by the
//! value resolver and the optimizer to report input they had to skip.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about skipped or unsupported input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported unit 'pt' in '12pt'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Quill {component}] ⚠ {message}").yellow());
    }
}

/// Returns `true` the first time a given component/message pair is seen.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    guard.get_or_insert_with(HashSet::new).insert(key)
}

/// Clear all recorded warnings so they can be reported again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
