use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExportError;
use crate::paths;

/// External HTML-to-PDF converter driven on the PATH.
const WKHTMLTOPDF: &str = "wkhtmltopdf";

/// Header/footer configuration for the PDF conversion step.
///
/// `footer_right` may use the `[page]` / `[topage]` placeholders, which the
/// converter substitutes with the current and total page number.
/// `footer_left` is empty by default; callers set it to the company name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfOptions {
    pub header_html: PathBuf,
    pub footer_html: PathBuf,
    pub footer_right: String,
    pub footer_left: String,
    pub footer_font_size: u32,
    pub footer_line: bool,
    pub footer_font_name: String,
    pub footer_spacing: u32,
    pub stylesheet: PathBuf,
}

impl Default for PdfOptions {
    fn default() -> Self {
        let dir = Path::new(paths::TEMPLATES_DIR);
        Self {
            header_html: paths::header_template(dir),
            footer_html: paths::footer_template(dir),
            footer_right: "Seite [page] von [topage]".to_string(),
            footer_left: String::new(),
            footer_font_size: 6,
            footer_line: true,
            footer_font_name: "Open Sans".to_string(),
            footer_spacing: 8,
            stylesheet: paths::stylesheet(dir),
        }
    }
}

impl PdfOptions {
    /// The converter flags for these options, in stable order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--header-html".to_string(),
            self.header_html.display().to_string(),
            "--footer-html".to_string(),
            self.footer_html.display().to_string(),
            "--footer-right".to_string(),
            self.footer_right.clone(),
            "--footer-left".to_string(),
            self.footer_left.clone(),
            "--footer-font-size".to_string(),
            self.footer_font_size.to_string(),
            "--footer-font-name".to_string(),
            self.footer_font_name.clone(),
            "--footer-spacing".to_string(),
            self.footer_spacing.to_string(),
            "--user-style-sheet".to_string(),
            self.stylesheet.display().to_string(),
        ];
        if self.footer_line {
            args.push("--footer-line".to_string());
        }
        args
    }
}

/// Convert rendered HTML into a PDF file at `output`.
///
/// The HTML is fed to the converter on stdin. A spawn failure or non-zero
/// exit aborts the run with the converter's stderr in the error; no retry,
/// no partial output handling.
pub fn pdf_from_html(html: &str, output: &Path, options: &PdfOptions) -> Result<(), ExportError> {
    let mut child = Command::new(WKHTMLTOPDF)
        .args(options.to_args())
        .arg("-")
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ExportError::Pdf(format!("failed to start {WKHTMLTOPDF}: {e}")))?;

    // Dropping stdin after the write closes the pipe so the converter sees EOF.
    child
        .stdin
        .take()
        .ok_or_else(|| ExportError::Pdf("converter stdin not captured".to_string()))?
        .write_all(html.as_bytes())?;

    let out = child.wait_with_output()?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(ExportError::Pdf(format!(
            "{WKHTMLTOPDF} exited with {}: {}",
            out.status,
            stderr.trim()
        )));
    }

    info!(path = %output.display(), "PDF written");
    Ok(())
}
