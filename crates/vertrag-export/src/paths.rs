//! Template and output path conventions.
//!
//! Pure path functions. These define where the rendering collaterals live
//! relative to the working directory.

use std::path::{Path, PathBuf};

/// Directory the HTML templates and stylesheet are loaded from.
pub const TEMPLATES_DIR: &str = "templates";

/// The PDF written by a run, overwritten on rerun.
pub const OUTPUT_PDF: &str = "out.pdf";

pub fn contract_template(dir: &Path) -> PathBuf {
    dir.join("contract.html")
}

pub fn header_template(dir: &Path) -> PathBuf {
    dir.join("header.html")
}

pub fn footer_template(dir: &Path) -> PathBuf {
    dir.join("footer.html")
}

pub fn stylesheet(dir: &Path) -> PathBuf {
    dir.join("contract.css")
}
