pub mod template;

pub use template::{DEFAULT_TEMPLATE, DocumentTemplate};

use crate::models::{Book, Page};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid template: {0}")]
    Template(String),
}

/// Read a manuscript or template file, with `\r\n` line endings normalised to `\n`
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    if content.contains('\r') {
        return Ok(content.replace("\r\n", "\n"));
    }
    Ok(content)
}

/// Load a document template from disk, or the built-in one when `path` is `None`
pub fn load_template(path: Option<&Path>) -> Result<DocumentTemplate, IoError> {
    match path {
        Some(path) => DocumentTemplate::parse(&read_file(path)?),
        None => DocumentTemplate::parse(DEFAULT_TEMPLATE),
    }
}

/// File name for a page, e.g. `42.xhtml`
pub fn output_file_name(page_number: u16, extension: &str) -> String {
    format!("{page_number}.{extension}")
}

/// Write one page through the template into `out_dir`
pub fn write_page(
    page: &Page,
    template: &DocumentTemplate,
    out_dir: &Path,
    extension: &str,
) -> Result<PathBuf, IoError> {
    let path = out_dir.join(output_file_name(page.number(), extension));
    let document = template.fill(page.number(), &page.dump());
    fs::write(&path, document).map_err(IoError::Io)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

/// Write every page of the book, returning the written paths in page order
pub fn write_book(
    book: &Book,
    template: &DocumentTemplate,
    out_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, IoError> {
    // Create the output directory if it doesn't exist
    fs::create_dir_all(out_dir).map_err(IoError::Io)?;

    let mut seen = HashSet::new();
    book.pages()
        .iter()
        .map(|page| {
            if !seen.insert(page.number()) {
                log::warn!(
                    "page {} appears more than once, overwriting its file",
                    page.number()
                );
            }
            write_page(page, template, out_dir, extension)
        })
        .collect()
}
