//! File extension registration
//!
//! Maps the native decoder's type identifiers onto file extensions and
//! keeps the resolved list for the lifetime of the process.

pub mod table;
pub mod resolver;

use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;

pub use resolver::{CExtensionList, ExtensionResolver, ExtensionSet};
pub use table::{find_entry, ExtensionEntry, EXTENSION_TABLE};

lazy_static! {
    // Filled once by the first registration, read-only afterwards
    static ref INPUT_EXTENSIONS: Mutex<Option<Arc<ExtensionSet>>> = Mutex::new(None);
}

/// Returns the process-wide input extension set, resolving it on first use
///
/// `identifiers` is only called by the first caller; later callers get the
/// cached set.
pub fn input_extensions<F>(identifiers: F) -> Arc<ExtensionSet>
where
    F: FnOnce() -> Vec<String>,
{
    let mut cached = INPUT_EXTENSIONS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = cached.as_ref() {
        return Arc::clone(set);
    }

    let set = Arc::new(ExtensionResolver::new().resolve(identifiers()));
    *cached = Some(Arc::clone(&set));
    set
}
