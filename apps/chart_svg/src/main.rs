use anyhow::Context;
use chrono::{NaiveDate, TimeZone, Utc};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use urania::{
    build_chart, ChartData, ChartRenderer, ChartRequest, FixedPositions, GeoLocation,
    VisualConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a natal chart to SVG")]
struct Args {
    /// Chart input (.json or .toml); the bundled sample chart when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Visual styling overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "birth-chart.svg")]
    output: PathBuf,

    /// Date shown in the chart title (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print the detected aspects
    #[arg(long)]
    print_aspects: bool,
}

fn load_chart(path: &Path) -> anyhow::Result<ChartData> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart input {}", path.display()))?;
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let mut data = if is_toml {
        ChartData::from_toml(&text)?
    } else {
        ChartData::from_json(&text)?
    };
    data.ensure_aspects();
    Ok(data)
}

fn sample_chart() -> anyhow::Result<ChartData> {
    let datetime = Utc
        .with_ymd_and_hms(1990, 6, 15, 14, 30, 0)
        .single()
        .context("Invalid sample chart time")?;
    let request = ChartRequest::new(
        datetime,
        Some(GeoLocation {
            lat: 51.5074,
            lon: -0.1278,
        }),
    );
    Ok(build_chart(&FixedPositions::sample(), &request)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let data = match &args.input {
        Some(path) => load_chart(path)?,
        None => {
            log::info!("No input given, rendering the sample chart");
            sample_chart()?
        }
    };

    let visual_config = match &args.config {
        Some(path) => VisualConfig::load(path)?,
        None => VisualConfig::default(),
    };

    let aspects = data.aspects.as_deref().unwrap_or_default();
    log::info!(
        "Planets: {}, houses: {}, aspects: {}",
        data.planets.len(),
        data.houses.as_ref().map_or(0, Vec::len),
        aspects.len()
    );

    if args.print_aspects {
        for aspect in aspects {
            println!(
                "{:<10} {:<11} {:<10} orb {:.2}",
                aspect.body1, aspect.aspect_type, aspect.body2, aspect.orb
            );
        }
    }

    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let document = ChartRenderer::with_config(visual_config)
        .dated(date)
        .render(&data);

    fs::write(&args.output, document.as_str())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!(
        "SVG saved to {} ({} bytes)",
        args.output.display(),
        document.len()
    );

    Ok(())
}
