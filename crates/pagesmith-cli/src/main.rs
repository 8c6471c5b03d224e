use anyhow::{Context, Result};
use clap::Parser;
use pagesmith_config::{Settings, SettingsOverrides};
use pagesmith_engine::{Book, io};
use std::path::PathBuf;

/// Convert a marker-annotated manuscript into one XHTML file per page.
#[derive(Debug, Parser)]
#[command(name = "pagesmith", version, about)]
struct Cli {
    /// Manuscript text file
    manuscript: PathBuf,

    /// Config file (defaults to ~/.config/pagesmith/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Document template with $page_number and $content placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory the page files are written to
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// File extension for page files
    #[arg(long)]
    extension: Option<String>,
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            output_dir: self.output_dir.clone(),
            template_path: self.template.clone(),
            extension: self.extension.clone(),
        }
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    log::info!("Config path: {}", config_path.display());

    let settings = match Settings::load_from_path(&config_path)? {
        Some(settings) => settings,
        None => {
            log::info!("No config file found, using defaults");
            Settings::default()
        }
    };
    Ok(settings.with_overrides(cli.overrides()))
}

fn run(cli: &Cli, settings: &Settings) -> Result<Vec<PathBuf>> {
    let raw_text = io::read_file(&cli.manuscript)
        .with_context(|| format!("reading manuscript {}", cli.manuscript.display()))?;
    let book = Book::new(&raw_text)
        .with_context(|| format!("parsing manuscript {}", cli.manuscript.display()))?;
    log::info!("Parsed {} pages", book.pages().len());

    let template = io::load_template(settings.template_path()).context("loading template")?;
    let written = io::write_book(&book, &template, settings.output_dir(), settings.extension())
        .with_context(|| format!("writing pages to {}", settings.output_dir().display()))?;

    log::info!(
        "Wrote {} pages to {}",
        written.len(),
        settings.output_dir().display()
    );
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    run(&cli, &settings)?;
    Ok(())
}
