//! ScreenBook — DOOH campaign configuration and pricing.
//!
//! Demo entry point: loads (or seeds) a screen catalog, walks one campaign
//! through all six wizard steps, and submits it through the mock adapter.

use chrono::{Duration, Local};
use clap::Parser;
use screenbook_catalog::{ScreenCatalog, ScreenFilter};
use screenbook_core::config::AppConfig;
use screenbook_core::draft::peak_hours;
use screenbook_core::types::{MediaAsset, ScreenType};
use screenbook_wizard::{MockSubmissionAdapter, WizardController};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "screenbook")]
#[command(about = "DOOH campaign configuration and pricing")]
#[command(version)]
struct Cli {
    /// Path to a JSON catalog snapshot (overrides config)
    #[arg(long, env = "SCREENBOOK__CATALOG__SOURCE_PATH")]
    catalog: Option<String>,

    /// Currency label for displayed amounts (overrides config)
    #[arg(long, env = "SCREENBOOK__CURRENCY")]
    currency: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screenbook=info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!("ScreenBook starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(path) = cli.catalog {
        config.catalog.source_path = Some(path);
    }
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }

    let catalog = match &config.catalog.source_path {
        Some(path) => ScreenCatalog::from_json_file(path)?,
        None => ScreenCatalog::seed_demo(),
    };
    info!(screens = catalog.len(), currency = %config.currency, "Catalog ready");

    let mut wizard = WizardController::new();

    // Step 1: basics. Advancing before the dates are in surfaces the
    // field-keyed errors without moving the cursor.
    wizard.set_name("Summer Launch 2024");
    if let Err(errors) = wizard.advance() {
        for (field, message) in errors.iter() {
            warn!(field, message, "Basics incomplete");
        }
    }
    let start = Local::now().date_naive();
    wizard.set_start_date(start);
    wizard.set_end_date(start + Duration::days(13));
    wizard.set_description("Two-week outdoor push across the capital.");
    let step = wizard
        .advance()
        .map_err(|e| anyhow::anyhow!("basics validation failed: {}", e))?;
    info!(step = step.label(), "Basics complete");

    // Step 2: discover outdoor screens and book the first two.
    let outdoor = catalog.filter(&ScreenFilter {
        screen_type: Some(ScreenType::Outdoor),
        ..Default::default()
    });
    for screen in &outdoor {
        info!(
            id = %screen.id,
            name = %screen.name,
            governorate = %screen.governorate,
            price_per_hour = screen.base_price_per_hour,
            "Discovered screen"
        );
    }
    for screen in outdoor.into_iter().take(2) {
        wizard.select_screen(screen);
    }
    let booked: Vec<String> = wizard
        .draft()
        .selected_screens
        .iter()
        .map(|s| s.id.clone())
        .collect();
    if let Some(first) = booked.first() {
        wizard.set_quantity(first, 2)?;
    }
    let step = wizard
        .advance()
        .map_err(|e| anyhow::anyhow!("screen selection failed: {}", e))?;
    info!(step = step.label(), screens = booked.len(), "Screens booked");

    // Step 3: the fixed peak window on the first screen, two evening
    // segments on the second.
    wizard.select_range(&booked[0], peak_hours())?;
    if let Some(second) = booked.get(1) {
        wizard.toggle_hour(second, 19)?;
        wizard.toggle_hour(second, 20)?;
    }
    let step = wizard
        .advance()
        .map_err(|e| anyhow::anyhow!("slot selection failed: {}", e))?;
    info!(
        step = step.label(),
        segments = wizard.draft().total_segments(),
        "Segments scheduled"
    );

    // Step 4: pricing review.
    let pricing = wizard.pricing();
    for screen in &pricing.screens {
        info!(
            screen = %screen.screen_name,
            slots_per_day = screen.slots_count,
            quantity = screen.quantity,
            daily = %format!("{:.2} {}", screen.daily_cost, config.currency),
            total = %format!("{:.2} {}", screen.total_cost, config.currency),
            "Screen cost"
        );
    }
    info!(
        days = pricing.days,
        grand_total = %format!("{:.2} {}", pricing.grand_total, config.currency),
        "Estimated campaign price"
    );
    wizard
        .advance()
        .map_err(|e| anyhow::anyhow!("pricing review failed: {}", e))?;

    // Step 5: media is optional; attach one creative to the first screen.
    wizard.add_media(
        &booked[0],
        MediaAsset::new("summer-spot-10s.mp4", 24_117_248, "video/mp4"),
    )?;
    wizard
        .advance()
        .map_err(|e| anyhow::anyhow!("media upload failed: {}", e))?;

    // Step 6: atomic hand-off to the submission collaborator.
    let campaign_id = wizard.submit(&MockSubmissionAdapter::new())?;
    info!(campaign_id = %campaign_id, "Campaign submitted successfully");

    Ok(())
}
