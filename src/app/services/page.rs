use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

/// Page shown when no start page is configured.
pub const DEFAULT_PAGE: &str = include_str!("../../../assets/editor.html");

/// Read the HTML for the document surface, falling back to the bundled page.
pub fn load_page(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            let html = fs::read_to_string(path)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "loaded page");
            Ok(html)
        }
        None => Ok(DEFAULT_PAGE.to_string()),
    }
}
