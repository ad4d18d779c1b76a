//! Extension list resolution
//!
//! Turns the native decoder's ordered list of type identifiers into a
//! deduplicated list of file extensions the host can match input names
//! against.

use std::collections::BTreeSet;
use std::ffi::{c_char, CString};
use std::ptr;

use log::{debug, warn};

use crate::coregraphics::errors::ImageIoError;
use crate::extensions::table::{self, BITMAP_CURSOR_EXTENSIONS, EPS_EXTENSIONS};

/// Deduplicated set of extensions, iterated in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every extension in `extensions`; duplicates are kept once
    pub fn extend_from(&mut self, extensions: &[&str]) {
        for ext in extensions {
            self.extensions.insert(ext.to_string());
        }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Builds a null-terminated C string array for hosts with a C interface
    pub fn to_c_list(&self) -> CExtensionList {
        // Extensions come from static tables and identifiers, never with NULs.
        let strings: Vec<CString> = self
            .extensions
            .iter()
            .filter_map(|ext| CString::new(ext.as_str()).ok())
            .collect();
        let mut pointers: Vec<*const c_char> = strings.iter().map(|s| s.as_ptr()).collect();
        pointers.push(ptr::null());
        CExtensionList { _strings: strings, pointers }
    }
}

/// Null-terminated `const char*` array owning its strings
pub struct CExtensionList {
    _strings: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl CExtensionList {
    /// Pointer to the first element; valid while `self` lives
    pub fn as_ptr(&self) -> *const *const c_char {
        self.pointers.as_ptr()
    }

    /// Entries including the terminating null
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn pointers(&self) -> &[*const c_char] {
        &self.pointers
    }
}

/// Resolves type identifiers against the static extension table
#[derive(Debug, Default)]
pub struct ExtensionResolver {
    unknown: Vec<String>,
}

impl ExtensionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers skipped by the last `resolve` because the table lacks them
    pub fn unknown_identifiers(&self) -> &[String] {
        &self.unknown
    }

    /// Builds the extension set for `identifiers`
    ///
    /// Unknown and non-ASCII identifiers are logged and skipped. The EPS and
    /// bitmap-cursor families are always added.
    ///
    /// # Arguments
    /// * `identifiers` - Type identifiers in the decoder's order
    ///
    /// # Returns
    /// The merged extension set
    pub fn resolve<I, T>(&mut self, identifiers: I) -> ExtensionSet
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.unknown.clear();
        let mut set = ExtensionSet::new();

        for identifier in identifiers {
            let identifier = identifier.as_ref();
            if !identifier.is_ascii() {
                warn!("Ignoring type identifier: {}", identifier);
                continue;
            }

            match table::find_entry(identifier) {
                Some(entry) => set.extend_from(entry.extensions),
                None => {
                    warn!("{}", ImageIoError::UnknownTypeIdentifier(identifier.to_string()));
                    self.unknown.push(identifier.to_string());
                }
            }
        }

        set.extend_from(EPS_EXTENSIONS);
        set.extend_from(BITMAP_CURSOR_EXTENSIONS);

        debug!("Resolved {} extensions", set.len());
        set
    }
}
