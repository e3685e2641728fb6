//! Host-side stylesheet loading.
//!
//! A drawing must stay usable without author styles, so a stylesheet that
//! cannot be read or parsed is logged and replaced by an empty one.

use std::path::Path;

use crate::parser::{self, StyleSheet};

/// Loads and parses `path`, falling back to an empty stylesheet on any
/// error.
pub fn load_stylesheet_or_default(path: impl AsRef<Path>) -> StyleSheet {
    let path = path.as_ref();
    match parser::parse_stylesheet_file(path) {
        Ok(sheet) => sheet,
        Err(err) => {
            log::warn!(
                "ignoring stylesheet {}: {err}; continuing without author styles",
                path.display()
            );
            StyleSheet::default()
        }
    }
}

/// Parses `source`, falling back to an empty stylesheet on error.
///
/// `origin` names the source in the log message.
pub fn parse_stylesheet_or_default(origin: &str, source: &str) -> StyleSheet {
    parser::parse_stylesheet(source).unwrap_or_else(|err| {
        log::warn!("ignoring stylesheet {origin}: {err}; continuing without author styles");
        StyleSheet::default()
    })
}
