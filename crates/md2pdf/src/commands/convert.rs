//! Markdown to PDF conversion command.

use std::path::{Path, PathBuf};

use clap::Args;
use md2pdf_config::{CliSettings, Config, Style};
use md2pdf_engine::{ExternalCommand, PdfEngine, Tectonic, WeasyPrint};
use md2pdf_html::HtmlStyle;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for converting a markdown file.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Input markdown file (default: `input.default` from md2pdf.toml).
    input: Option<PathBuf>,

    /// Output PDF file (default: input with a .pdf extension).
    output: Option<PathBuf>,

    /// Style preset: resume, doc or notes (default: auto-detect from file name).
    #[arg(short, long)]
    style: Option<Style>,

    /// Path to configuration file (default: auto-discover md2pdf.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// LaTeX engine program (overrides config).
    #[arg(long, env = "MD2PDF_TECTONIC")]
    tectonic: Option<String>,

    /// HTML-to-PDF engine program (overrides config).
    #[arg(long, env = "MD2PDF_WEASYPRINT")]
    weasyprint: Option<String>,

    /// Write the intermediate .tex or .html file without running an engine.
    #[arg(long)]
    emit_only: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConvertArgs {
    /// Execute the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the intermediate file
    /// cannot be written, or the PDF engine fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            tectonic: self.tectonic.clone(),
            weasyprint: self.weasyprint.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = self.resolve_input(&config)?;
        let pdf_path = self
            .output
            .clone()
            .unwrap_or_else(|| input.with_extension("pdf"));
        let style = self.style.unwrap_or_else(|| guess_style(&config, &input));

        let markdown = std::fs::read_to_string(&input).map_err(|source| CliError::Read {
            path: input.clone(),
            source,
        })?;
        output.info(&format!("Converting {} [{style}]...", input.display()));

        let intermediate = match style {
            Style::Resume => {
                let tex_path = pdf_path.with_extension("tex");
                std::fs::write(&tex_path, md2pdf_resume::convert(&markdown))?;
                tex_path
            }
            Style::Doc | Style::Notes => {
                let html_style = if style == Style::Notes {
                    HtmlStyle::Notes
                } else {
                    HtmlStyle::Doc
                };
                let html_path = pdf_path.with_extension("html");
                std::fs::write(&html_path, md2pdf_html::render_html(&markdown, html_style))?;
                html_path
            }
        };

        if self.emit_only {
            output.success(&format!("OK {}", intermediate.display()));
            output.warning("Skipped PDF engine (--emit-only)");
            return Ok(());
        }

        let engine = engine_for(style, &config);
        compile(engine.as_ref(), &intermediate, &pdf_path)?;
        if style == Style::Resume {
            output.success(&format!("OK {}", intermediate.display()));
        }

        let size_kb = std::fs::metadata(&pdf_path)?.len() / 1024;
        output.success(&format!(
            "OK {} ({size_kb}KB) [{style}]",
            pdf_path.display()
        ));
        Ok(())
    }

    fn resolve_input(&self, config: &Config) -> Result<PathBuf, CliError> {
        self.input
            .clone()
            .or_else(|| config.default_input.clone())
            .ok_or_else(|| {
                CliError::Validation(
                    "no input file given and no [input] default in md2pdf.toml".to_owned(),
                )
            })
    }
}

fn guess_style(config: &Config, input: &Path) -> Style {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    config.styles.guess(&name)
}

fn engine_for(style: Style, config: &Config) -> Box<dyn PdfEngine> {
    let engines = &config.engines;
    match style {
        Style::Resume => Box::new(Tectonic::new(
            ExternalCommand::new(&engines.tectonic).with_args(engines.tectonic_args.iter().cloned()),
        )),
        Style::Doc | Style::Notes => Box::new(WeasyPrint::new(
            ExternalCommand::new(&engines.weasyprint)
                .with_args(engines.weasyprint_args.iter().cloned()),
        )),
    }
}

fn compile(engine: &dyn PdfEngine, source: &Path, pdf_path: &Path) -> Result<(), CliError> {
    tracing::info!(engine = engine.name(), source = %source.display(), "Compiling PDF");
    engine
        .compile(source, pdf_path)
        .map_err(|source_err| CliError::Engine {
            source: source_err,
            intermediate: source.to_path_buf(),
        })
}
