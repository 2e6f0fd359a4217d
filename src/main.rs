use clap::{Args, Parser, Subcommand};
use ecoroute::config::AppConfig;
use ecoroute::eco::history;
use ecoroute::eco::stats::CommuteStats;
use ecoroute::eco::validate::validate_address_with_min;
use ecoroute::error::AppError;
use ecoroute::telemetry;
use ecoroute::{EcoScoreEngine, RouteAssessment, RouteMetrics, TransportCatalog};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "ecoroute",
    about = "Score commutes, compare transport modes, and roll up commute statistics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess a candidate route against the car baseline
    Assess(AssessArgs),
    /// Summarize a route-history CSV into dashboard statistics
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Route length in kilometers
    #[arg(long)]
    distance_km: f64,
    /// Travel time in minutes (estimated from mode speed when omitted)
    #[arg(long)]
    duration_min: Option<f64>,
    /// Transport mode id from the catalog
    #[arg(long, default_value = "bicycle")]
    mode: String,
    /// Baseline mode id the savings are measured against
    #[arg(long, default_value = "car")]
    baseline: String,
    /// Free-text start address (validated before assessing)
    #[arg(long)]
    from: Option<String>,
    /// Free-text destination address (validated before assessing)
    #[arg(long)]
    to: Option<String>,
    /// Emit the assessment as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Route-history CSV export
    #[arg(long)]
    history: PathBuf,
    /// Emit the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Stats(args) => run_stats(args),
    }
}

fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let min_length = config.scoring.min_address_length;
    for (flag, address) in [("--from", &args.from), ("--to", &args.to)] {
        if let Some(text) = address {
            if !validate_address_with_min(text, min_length) {
                return Err(AppError::invalid_input(format!(
                    "{flag} must be at least {min_length} characters of address text"
                )));
            }
        }
    }

    let catalog = TransportCatalog::standard();
    let candidate = catalog
        .get(&args.mode)
        .ok_or_else(|| unknown_mode(&args.mode, &catalog))?
        .clone();
    let baseline = catalog
        .get(&args.baseline)
        .ok_or_else(|| unknown_mode(&args.baseline, &catalog))?
        .clone();

    let duration_min = args
        .duration_min
        .unwrap_or_else(|| args.distance_km.max(0.0) / candidate.speed_kmh * 60.0);
    let metrics = RouteMetrics::derive(args.distance_km, duration_min, &baseline, &candidate);

    let engine = EcoScoreEngine::new(config.scoring.clone());
    let assessment = engine.assess(&metrics, &baseline, &candidate, &catalog);

    info!(mode = %assessment.mode_id, score = assessment.eco_score, "route assessed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_assessment(&assessment, &args);
    }

    Ok(())
}

fn unknown_mode(id: &str, catalog: &TransportCatalog) -> AppError {
    let known: Vec<&str> = catalog.ids().collect();
    AppError::invalid_input(format!(
        "unknown transport mode '{id}' (known modes: {})",
        known.join(", ")
    ))
}

fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let records = history::from_path(&args.history)?;
    let stats = CommuteStats::from_records(&records);
    let summary = stats.summary();

    info!(routes = summary.routes_completed, "history summarized");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Commute dashboard");
    println!(
        "Routes completed: {} ({} traveled, {} on the move)",
        summary.routes_completed, summary.total_distance, summary.total_duration
    );
    println!(
        "CO2 saved: {} (about {:.1} tree-years of absorption)",
        summary.total_co2_saved, summary.trees_equivalent
    );
    println!("Average eco score: {}", summary.average_eco_score);
    println!(
        "Rider level: {} (level {})",
        summary.rider_level_label, summary.rider_level_rank
    );

    println!("\nAchievements");
    for achievement in &summary.achievements {
        let status = if achievement.unlocked {
            "unlocked"
        } else {
            "locked"
        };
        println!(
            "- {} [{status}]: {}",
            achievement.title, achievement.description
        );
    }

    Ok(())
}

fn render_assessment(assessment: &RouteAssessment, args: &AssessArgs) {
    println!("Route analysis");
    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        println!("Trip: {from} -> {to}");
    }
    println!("Mode: {}", assessment.mode_label);
    println!(
        "Eco score: {} ({}, {})",
        assessment.eco_score, assessment.band_label, assessment.color_token
    );
    println!("Distance: {}", assessment.distance_display);
    println!("Duration: {}", assessment.duration_display);
    println!("CO2 emissions: {}", assessment.emissions_display);
    println!("CO2 avoided: {}", assessment.avoided_display);

    if !assessment.observations.is_empty() {
        println!("\nHighlights");
        for note in &assessment.observations {
            println!("- {note}");
        }
    }

    if assessment.recommendations.is_empty() {
        println!("\nRecommendations: none, this is already a low-carbon choice");
    } else {
        println!("\nRecommendations");
        for rec in &assessment.recommendations {
            println!("- [{}] {}", rec.impact.label(), rec.message);
        }
    }
}
