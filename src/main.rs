use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use evoa_notice::config::{NoticeConfig, PartialNoticeConfig};
use evoa_notice::form::wizard::{run_wizard, StdinPrompter};
use evoa_notice::form::FormField;
use evoa_notice::render::{build_document, new_renderer, resolve, Format, RenderOptions};
use evoa_notice::{random_refs_config, Error, Result};

#[derive(Parser)]
#[command(name = "evoa-notice", version, about = "Generate E-VOA approval notices")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in the configuration interactively, then render the notice
    Form {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render a notice from a JSON config file and/or --set overrides
    Render {
        /// Path to a JSON config; fields may be omitted
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Override one field, e.g. --set applicantDetails.name="Jane Roe"
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a starter config JSON with every field present
    Sample {
        /// Pre-fill the two reference fields with generated values
        #[arg(long)]
        random_refs: bool,
        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format: html or text
    #[arg(long, default_value = "html")]
    format: Format,
    /// Write to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Wrap column for text output
    #[arg(long, value_name = "COLS", default_value_t = evoa_notice::render::DEFAULT_TEXT_WIDTH)]
    text_width: usize,
    /// Download the QR/barcode images and inline them as data URIs
    #[cfg(feature = "fetch")]
    #[arg(long)]
    embed_images: bool,
}

fn parse_set(pair: &str) -> Result<(FormField, String)> {
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| Error::InputError(format!("expected FIELD=VALUE, got '{pair}'")))?;
    Ok((name.parse()?, value.to_string()))
}

fn write_output(rendered: &str, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| Error::RenderError(format!("Failed to write {}: {}", path.display(), e))),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn emit(partial: PartialNoticeConfig, output: &OutputArgs) -> Result<()> {
    let options = RenderOptions {
        format: output.format,
        text_width: output.text_width,
        ..Default::default()
    };
    let config = resolve(partial);
    #[allow(unused_mut)]
    let mut document = build_document(&config, &options.endpoints);

    // Embedding is best-effort; on failure the notice keeps the service URLs.
    #[cfg(feature = "fetch")]
    if output.embed_images {
        let embedded = evoa_notice::ImageFetcher::new()
            .and_then(|fetcher| fetcher.embed_document_images(&mut document));
        if let Err(e) = embedded {
            eprintln!("Warning: {e}; keeping image URLs");
        }
    }

    let rendered = new_renderer(&options).render(&document)?;
    write_output(&rendered, output.out.as_ref())
}

fn sample_config(random_refs: bool) -> Result<String> {
    let config = if random_refs {
        random_refs_config()
    } else {
        NoticeConfig::blank()
    };
    let mut json = serde_json::to_string_pretty(&config)
        .map_err(|e| Error::ConfigError(format!("Failed to serialize sample config: {}", e)))?;
    json.push('\n');
    Ok(json)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Form { output } => {
            let config = run_wizard(&mut StdinPrompter)?;
            emit(config.into_partial(), &output)
        }
        Command::Render {
            config,
            set,
            output,
        } => {
            let mut partial = match config {
                Some(path) => PartialNoticeConfig::from_path(&path)?,
                None => PartialNoticeConfig::default(),
            };
            for pair in &set {
                let (field, value) = parse_set(pair)?;
                field.set_partial(&mut partial, value);
            }
            emit(partial, &output)
        }
        Command::Sample { random_refs, out } => {
            let json = sample_config(random_refs)?;
            write_output(&json, out.as_ref())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
