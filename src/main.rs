use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use villemeteo_app::{render_record, Session};
use villemeteo_core::{Config, ResultLimit};
use villemeteo_map::{apply, FillColor, MapSurface, SvgMap, DEFAULT_PATH_IDS};

/// Search French communes, show their weather and color the department map
#[derive(Parser)]
#[command(name = "villemeteo")]
#[command(author, version)]
struct Cli {
    /// Commune name to search for
    query: String,

    /// Maximum number of communes (1, 2, 5, 10 or all)
    #[arg(short, long)]
    limit: Option<ResultLimit>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Department population dataset (JSON)
    #[arg(long)]
    population: Option<PathBuf>,

    /// Department map to recolor (SVG)
    #[arg(long, requires = "out")]
    map: Option<PathBuf>,

    /// Where to write the recolored map
    #[arg(long, requires = "map")]
    out: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    villemeteo_core::init()?;

    let cli = Cli::parse();

    let (mut config, _) = Config::load_validated(cli.config.as_deref())?;
    if let Some(path) = cli.population {
        config.map.population_path = Some(path);
    }
    if let Some(limit) = cli.limit {
        config.search.default_limit = limit;
    }

    let mut map = match &cli.map {
        Some(path) => Some(
            SvgMap::load(path).with_context(|| format!("Failed to load map {}", path.display()))?,
        ),
        None => None,
    };
    let path_ids = match &map {
        Some(svg) => svg.path_ids(),
        None => DEFAULT_PATH_IDS.collect(),
    };

    let session = Session::from_config(&config, path_ids)?;
    let outcome = match session.search(&cli.query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    tracing::info!(
        "{} communes, {} with weather",
        outcome.communes.len(),
        outcome.records.len()
    );

    if outcome.communes.is_empty() {
        println!("Aucune commune trouvée pour '{}'", cli.query.trim());
    }
    for record in &outcome.records {
        println!("{}\n", render_record(record));
    }

    let searched: Vec<String> = outcome
        .fills
        .iter()
        .filter(|(_, fill)| **fill == FillColor::Black)
        .map(|(id, _)| id.to_string())
        .collect();
    if !searched.is_empty() {
        println!("Départements en noir : {}", searched.join(", "));
    }

    if let (Some(svg), Some(out)) = (map.as_mut(), cli.out.as_deref()) {
        apply(svg, &outcome.fills);
        std::fs::write(out, svg.render())
            .with_context(|| format!("Failed to write map {}", out.display()))?;
        tracing::info!("Map written to {}", out.display());
    }

    Ok(())
}
