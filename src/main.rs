use artspace::gallery::{ArtworkId, GalleryState};
use artspace::layout::{LayoutVariant, Viewport};
use artspace::{config, generate, output, process, scan};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "artspace")]
#[command(about = "Single-screen gallery viewer for a five-piece art catalog")]
#[command(long_about = "\
Single-screen gallery viewer for a five-piece art catalog

The content directory holds exactly five artworks, numbered 001 to 005.
Each is shown with its title, artist and year, with Previous / Next
controls. Portrait windows stack image, information and controls; landscape
windows put the image beside them.

Content structure:

  content/
  ├── config.toml              # Site config (optional)
  ├── 001-Still-Life.jpg       # Artwork 1 (number prefix = artwork id)
  ├── 001-Still-Life.txt       # Sidecar: title, artist, year (one per line)
  ├── 002-Harbour.png
  ├── 003-Dunes.webp
  ├── 004-Portrait.jpg
  └── 005-Night-Garden.tif

Metadata resolution (first available wins):
  Title:  sidecar line 1 → filename (001-Still-Life.jpg → \"Still Life\")
  Artist: sidecar line 2 → \"Unknown artist\"
  Year:   sidecar line 3 → \"n.d.\"

Run 'artspace gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log debug diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the content directory and list the catalog
    Check,
    /// Build the static site: display images plus one page per state and layout
    Build {
        /// Copy the original images instead of resizing them
        #[arg(long)]
        no_process: bool,
    },
    /// Render a single standalone page for one artwork and viewport
    Preview {
        /// Artwork to show (out-of-range values are clamped to 1..=5)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        id: i64,

        /// Viewport as WIDTHxHEIGHT, e.g. 800x1080
        #[arg(long, conflicts_with = "orientation")]
        viewport: Option<Viewport>,

        /// Use the configured preview viewport for this orientation
        #[arg(long, value_parser = parse_orientation)]
        orientation: Option<LayoutVariant>,

        /// Where to write the page
        #[arg(long, default_value = "preview.html")]
        out: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn parse_orientation(s: &str) -> Result<LayoutVariant, String> {
    LayoutVariant::from_slug(s)
        .ok_or_else(|| format!("expected 'portrait' or 'landscape', got '{s}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_catalog_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::Build { no_process } => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_catalog_output(&manifest, &cli.source);

            println!("==> Stage 2: Preparing images");
            init_thread_pool(&manifest.config.processing);
            let images_dir = cli.output.join(process::IMAGES_DIR);
            let catalog = if no_process {
                let catalog = process::copy_originals(&manifest.catalog, &images_dir)?;
                output::print_copy_output(&catalog);
                catalog
            } else {
                let config = process::ProcessConfig::from_site_config(&manifest.config);
                let result = process::process(&manifest.catalog, &images_dir, &config)?;
                output::print_process_output(&result);
                result.catalog
            };

            println!("==> Stage 3: Generating HTML → {}", cli.output.display());
            let site = generate::generate(&catalog, &manifest.config, &cli.output)?;
            output::print_generate_output(&site, &catalog);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Preview {
            id,
            viewport,
            orientation,
            out,
        } => {
            // Absolute image paths keep the page valid wherever it is written.
            let source = cli.source.canonicalize()?;
            let manifest = scan::scan(&source)?;

            let viewport = resolve_viewport(&manifest.config, viewport, orientation);
            if ArtworkId::new(id).is_none() {
                tracing::warn!("Artwork id {} is outside 1..=5, clamping", id);
            }
            let state = GalleryState::initial().navigate(id);

            let css = generate::site_css(&manifest.config);
            let page = generate::render_preview(&manifest.catalog, state, viewport, &css);
            write_page(&out, &page.into_string())?;

            println!(
                "{}",
                output::format_preview_line(&manifest.catalog, state.current_id, viewport, &out)
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Explicit viewport, else the configured one for the orientation, else the
/// configured portrait viewport.
fn resolve_viewport(
    config: &config::SiteConfig,
    viewport: Option<Viewport>,
    orientation: Option<LayoutVariant>,
) -> Viewport {
    viewport.unwrap_or_else(|| {
        config
            .preview
            .viewport(orientation.unwrap_or(LayoutVariant::Vertical))
    })
}

fn write_page(path: &Path, html: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
}

/// Diagnostics go to stderr; stdout carries the formatted command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("artspace={default_level}")),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
