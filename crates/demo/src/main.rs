// File: crates/demo/src/main.rs
// Summary: CLI that loads the cyclist dataset and writes the scatter plot as SVG (plus optional PNG and scene JSON).

mod fetch;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{render_svg, theme, Chart, RenderOptions, DATASET_URL};
use chart_render_skia::SkiaRenderer;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::fetch::{http_client, Source};

#[derive(Parser, Debug)]
#[command(name = "doping-chart", version, about = "Render the doping-in-cycling scatter plot")]
struct Cli {
    /// Dataset URL (ignored when --input is given)
    #[arg(long, env = "DOPING_CHART_URL")]
    url: Option<String>,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long, default_value = "target/out", value_name = "DIR")]
    out_dir: PathBuf,

    /// Color preset: classic, dark or high-contrast
    #[arg(long, default_value = "classic")]
    theme: String,

    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    width: u32,

    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    height: u32,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Also rasterize the chart to doping_chart.png
    #[arg(long)]
    png: bool,

    /// Also dump the scene description to doping_chart.scene.json
    #[arg(long)]
    scene_json: bool,
}

impl Cli {
    fn source(&self) -> Source {
        match (&self.input, &self.url) {
            (Some(path), url) => {
                if url.is_some() {
                    warn!("--input given, ignoring dataset URL");
                }
                Source::File(path.clone())
            }
            (None, Some(url)) => Source::Url(url.clone()),
            (None, None) => Source::Url(DATASET_URL.to_string()),
        }
    }

    fn render_options(&self) -> Result<RenderOptions> {
        let theme = theme::find(&self.theme);
        if !theme.name.eq_ignore_ascii_case(&self.theme) {
            warn!(requested = %self.theme, "unknown theme, using {}", theme.name);
        }
        let opts = RenderOptions { width: self.width, height: self.height, theme, ..RenderOptions::default() };
        anyhow::ensure!(
            opts.insets.fits(opts.width, opts.height),
            "{}x{} leaves no room for the plot area inside the margins",
            opts.width,
            opts.height
        );
        Ok(opts)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    let opts = cli.render_options()?;
    let source = cli.source();
    let client = http_client(Duration::from_secs(cli.timeout_secs))?;
    let records = source
        .load(&client)
        .await
        .with_context(|| format!("failed to load dataset from {source}"))?;

    let flagged = records.iter().filter(|r| r.has_allegation()).count();
    info!(records = records.len(), flagged, "loaded dataset");

    let chart = Chart::with_options(records, opts)?;
    let scene = chart.scene();

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create '{}'", cli.out_dir.display()))?;

    let svg_path = cli.out_dir.join("doping_chart.svg");
    std::fs::write(&svg_path, render_svg(&scene))
        .with_context(|| format!("failed to write '{}'", svg_path.display()))?;
    info!(path = %svg_path.display(), "wrote SVG");

    if cli.png {
        let png_path = cli.out_dir.join("doping_chart.png");
        SkiaRenderer::new()
            .render_to_png(&scene, &png_path)
            .with_context(|| format!("failed to render '{}'", png_path.display()))?;
        info!(path = %png_path.display(), "wrote PNG");
    }

    if cli.scene_json {
        let json_path = cli.out_dir.join("doping_chart.scene.json");
        let json = serde_json::to_vec_pretty(&scene)?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("failed to write '{}'", json_path.display()))?;
        info!(path = %json_path.display(), "wrote scene JSON");
    }

    Ok(())
}
