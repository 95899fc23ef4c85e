//! Dinopark Engine - Main entry point.
//!
//! Loads configuration, builds the park from the optional seed file and logs
//! a summary of what it holds.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dinopark_domain::{PlaceFilter, PlaceKind};
use dinopark_engine::infrastructure::seed::{apply_places, ParkSeed};
use dinopark_engine::{AppConfig, Park, ParkControl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root before reading any configuration.
    load_dotenv_from_repo_root();

    let config = AppConfig::from_env().context("loading configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(park = %config.park_name, "Starting Dinopark Engine");

    let seed = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading park seed");
            ParkSeed::from_path(path)
                .with_context(|| format!("loading seed file {}", path.display()))?
        }
        None => ParkSeed::default(),
    };

    let park = Park::new()
        .with_enclosures(seed.enclosures())
        .with_dinos(seed.dinosaurs().context("building seeded dinosaurs")?);
    let registered = apply_places(&park, &seed)
        .await
        .context("registering seeded places")?;
    tracing::info!(registered, "Seeded places registered");

    for kind in PlaceKind::ALL {
        let places = park.list_places(Some(PlaceFilter::by_kind(kind))).await?;
        tracing::info!(kind = %kind, count = places.len(), "Places by kind");
    }

    for handle in park.enclosures() {
        let state = handle.read_state().await;
        tracing::info!(
            enclosure_id = %state.id,
            power = %state.power,
            species = state.capacity.as_ref().map(|c| c.species()).unwrap_or("unset"),
            max_occupants = ?state.capacity.as_ref().map(|c| c.max_occupants()),
            occupants = state.occupants.len(),
            "Enclosure"
        );
    }

    tracing::info!(
        park = %config.park_name,
        places = park.places().len().await,
        enclosures = park.enclosures().len(),
        dinos = park.dinos().len(),
        "Park ready"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
