//! xmldoc — generate Markdown or HTML from compiler XML documentation files.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `xmldoc -f html < MyLib.xml > documentation.html`
//! - **file mode**: `xmldoc -o docs -f bitbucket bin/*.xml`

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use xmldoc::render;
use xmldoc::ClassEntity;

/// Stylesheet referenced by the HTML output.
const STYLESHEET: &str = include_str!("../assets/styles.css");
const STYLESHEET_NAME: &str = "styles.css";

#[derive(Parser)]
#[command(
    name = "xmldoc",
    version,
    about = "Generate Markdown and HTML from compiler XML documentation files"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), bitbucket, html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Merge all inputs into a single document named after the format
    /// (documentation.md, BitbucketDocumentation.md, documentation.html)
    #[arg(long)]
    single: bool,

    /// Do not write styles.css next to HTML output
    #[arg(long)]
    no_stylesheet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one XML document from stdin, write the rendering to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let classes = xmldoc::parse_str(&input).context("failed to parse XML from stdin")?;
    print!("{}", renderer.render(&classes));
    Ok(())
}

/// file mode: convert every input, one output per input or a merged document.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let mut merged: Vec<ClassEntity> = Vec::new();
    let mut written = 0usize;

    for path in &input_files {
        let Some(classes) = read_documentation(path) else {
            continue;
        };

        if cli.single {
            merged.extend(classes);
            continue;
        }

        // Skip files without documented types (e.g., assemblies with no public API)
        if classes.is_empty() {
            info!(file = %path.display(), "no documented types, skipping");
            continue;
        }

        let name = derive_output_name(path);
        let out_path = output_dir.join(format!("{}.{}", name, renderer.file_extension()));
        write_output(&out_path, &renderer.render(&classes))?;
        written += 1;
    }

    if cli.single {
        if merged.is_empty() {
            warn!("no documented types found in any input");
        } else {
            let out_path = output_dir.join(format!(
                "{}.{}",
                renderer.default_file_stem(),
                renderer.file_extension()
            ));
            write_output(&out_path, &renderer.render(&merged))?;
            written += 1;
        }
    }

    if written > 0 && renderer.file_extension() == "html" && !cli.no_stylesheet {
        write_stylesheet(output_dir)?;
    }

    Ok(())
}

/// Read and extract one input file. Unreadable or malformed files are
/// reported and skipped so one bad file does not stop a batch.
fn read_documentation(path: &Path) -> Option<Vec<ClassEntity>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "skipping unreadable file");
            return None;
        }
    };
    match xmldoc::parse_str(&content) {
        Ok(classes) => {
            info!(file = %path.display(), types = classes.len(), "parsed");
            Some(classes)
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "skipping malformed XML");
            None
        }
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    info!(file = %path.display(), "wrote");
    Ok(())
}

/// Place the stylesheet next to HTML output unless one is already there.
fn write_stylesheet(output_dir: &Path) -> Result<()> {
    let path = output_dir.join(STYLESHEET_NAME);
    if path.exists() {
        return Ok(());
    }
    fs::write(&path, STYLESHEET)
        .with_context(|| format!("failed to write stylesheet: {}", path.display()))
}

/// File extensions recognized as documentation files.
const SUPPORTED_EXTENSIONS: &[&str] = &["xml"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for XML files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directory: scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

/// Derive the output file name (without extension) from an input path.
/// "bin/Release/MyLib.xml" → "MyLib"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "documentation".to_string())
}
