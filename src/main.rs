mod error;
mod keying;
mod output;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use keying::{BackgroundKey, WhiteThreshold};
use output::{OutputSink, PngWriter, SvgWrapper};
use source::{FileSource, ImageSource};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Fixed locations of the source logo and the generated artifacts
#[derive(Debug, Clone)]
struct LogoPaths {
    input: PathBuf,
    png: PathBuf,
    svg: PathBuf,
}

impl Default for LogoPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from("public/logo.png"),
            // Overwrites the source logo
            png: PathBuf::from("public/logo.png"),
            svg: PathBuf::from("public/logo.svg"),
        }
    }
}

/// Summary of a finished run
#[derive(Debug)]
struct LogoArtifacts {
    width: u32,
    height: u32,
    keyed: usize,
    written: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let ansi = std::io::stdout().is_terminal();
    console_subscriber(log_level, ansi, std::io::stdout).init();

    report(&LogoPaths::default());
}

/// Stdout logger; colour only when attached to a terminal
fn console_subscriber<W>(
    level: tracing::Level,
    ansi: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// Run the conversion and log its outcome
///
/// Failures are reported, not propagated: the exit status stays 0.
fn report(paths: &LogoPaths) {
    match process_logo(paths) {
        Ok(artifacts) => tracing::debug!(
            "Done: {}x{}, {} pixels keyed, wrote {:?}",
            artifacts.width,
            artifacts.height,
            artifacts.keyed,
            artifacts.written
        ),
        Err(e) => tracing::error!("Error processing image: {:#}", e),
    }
}

/// Convert the logo at `paths.input` into a transparent PNG and an SVG wrapper
fn process_logo(paths: &LogoPaths) -> Result<LogoArtifacts> {
    if paths.png == paths.input {
        tracing::debug!(
            "Output PNG overwrites the source image at {}",
            paths.input.display()
        );
    }

    let mut source = FileSource::new(&paths.input);
    let key = WhiteThreshold::new();
    // PNG must come first: the SVG embeds the file it writes
    let mut sinks: Vec<Box<dyn OutputSink>> = vec![
        Box::new(PngWriter::new(&paths.png)),
        Box::new(SvgWrapper::new(&paths.png, &paths.svg)),
    ];

    run_pipeline(&mut source, &key, &mut sinks)
}

fn run_pipeline<S, K>(
    source: &mut S,
    key: &K,
    sinks: &mut [Box<dyn OutputSink>],
) -> Result<LogoArtifacts>
where
    S: ImageSource,
    K: BackgroundKey,
{
    let mut image = source
        .load()
        .with_context(|| format!("Failed to load {}", source.path().display()))?;
    let (width, height) = image.dimensions();
    tracing::debug!("Loaded {}x{} image", width, height);

    let keyed = key.key_out(&mut image);

    let mut written = Vec::with_capacity(sinks.len());
    for sink in sinks.iter_mut() {
        sink.write_image(&image)
            .with_context(|| format!("Failed to produce {}", sink.path().display()))?;
        written.push(sink.path().to_path_buf());
    }

    Ok(LogoArtifacts {
        width,
        height,
        keyed,
        written,
    })
}
