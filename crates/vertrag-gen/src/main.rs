use std::path::Path;

use eyre::Result;
use tracing::info;

use vertrag_core::assemble::assemble_contract;
use vertrag_export::paths;
use vertrag_export::pdf::{pdf_from_html, PdfOptions};
use vertrag_export::render::render_contract;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data = assemble_contract();
    info!(blocks = data.elements.len(), "contract assembled");

    let html = render_contract(&data, Path::new(paths::TEMPLATES_DIR))?;

    let options = PdfOptions {
        footer_left: data.company_full_name.clone(),
        ..PdfOptions::default()
    };
    let output = Path::new(paths::OUTPUT_PDF);
    pdf_from_html(&html, output, &options)?;

    info!(path = %output.display(), "done");
    Ok(())
}
