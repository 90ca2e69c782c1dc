use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{WrapErr, bail, eyre};
use communal::{charts, export, init_logging, profile_io, report};
use communal_core::config::{DEFAULT_END_YEAR, DEFAULT_START_YEAR, builtin_profiles, find_builtin};
use communal_core::model::columns::{RECETTES_TOTALES, REVENUE_COMPONENTS};
use communal_core::model::{FinancialDataset, MunicipalProfile};
use communal_core::{GenerationConfig, NoiseMode, generate, generate_batch, generate_seeded};

const PREVIEW_ROWS: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "communal")]
#[command(about = "Generate synthetic municipal finance datasets with charts and a report")]
struct Args {
    /// Built-in municipality (name or slug)
    #[arg(short, long, default_value = "possession", conflicts_with_all = ["profile", "all"])]
    commune: String,

    /// Load the municipal profile from a YAML file instead
    #[arg(short, long, conflicts_with = "all")]
    profile: Option<PathBuf>,

    /// Generate every built-in municipality
    #[arg(long)]
    all: bool,

    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    start_year: i16,

    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    end_year: i16,

    /// Seed for reproducible noise (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable noise: closed-form values with shocks and overlay only
    #[arg(long)]
    no_noise: bool,

    /// Directory receiving the CSV and chart files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip the text charts
    #[arg(long)]
    no_charts: bool,

    /// Write the selected profile to this YAML file and exit
    #[arg(long)]
    dump_profile: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn select_profiles(args: &Args) -> color_eyre::Result<Vec<MunicipalProfile>> {
    if let Some(path) = &args.profile {
        return Ok(vec![profile_io::load_profile(path)?]);
    }
    if args.all {
        return Ok(builtin_profiles());
    }
    find_builtin(&args.commune).map(|p| vec![p]).ok_or_else(|| {
        let known: Vec<String> = builtin_profiles().into_iter().map(|p| p.slug).collect();
        eyre!(
            "Unknown municipality {:?} (built-in: {})",
            args.commune,
            known.join(", ")
        )
    })
}

fn warn_on_revenue_gap(dataset: &FinancialDataset) {
    let Some(gap) = dataset.component_gap(RECETTES_TOTALES, &REVENUE_COMPONENTS) else {
        return;
    };
    let worst = gap
        .iter()
        .zip(dataset.years())
        .max_by(|a, b| a.0.abs().total_cmp(&b.0.abs()));
    if let Some((gap, year)) = worst
        && gap.abs() > f64::EPSILON
    {
        tracing::warn!(
            municipality = dataset.municipality(),
            %year,
            gap,
            "Recettes_Totales differs from the sum of its components"
        );
    }
}

fn publish(
    args: &Args,
    profile: &MunicipalProfile,
    dataset: &FinancialDataset,
) -> color_eyre::Result<()> {
    warn_on_revenue_gap(dataset);

    let csv_path = export::export_csv(dataset, &profile.slug, &args.output_dir)?;
    println!("Données sauvegardées: {}", csv_path.display());
    println!("\nAperçu des données:");
    print!("{}", export::preview(dataset, PREVIEW_ROWS));

    if !args.no_charts {
        let chart_path = charts::write_charts(dataset, &profile.slug, &args.output_dir)?;
        println!("\nAnalyse financière: {}", chart_path.display());
    }

    println!();
    print!("{}", report::render_report(dataset, &profile.narrative));
    println!();
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let profiles = select_profiles(&args)?;

    if let Some(path) = &args.dump_profile {
        let [profile] = profiles.as_slice() else {
            bail!("--dump-profile needs exactly one profile, got {}", profiles.len());
        };
        return profile_io::dump_profile(profile, path);
    }

    let config = GenerationConfig::new(args.start_year, args.end_year)
        .with_noise(NoiseMode::from_enabled(!args.no_noise));

    let datasets = if let [profile] = profiles.as_slice() {
        let dataset = match args.seed {
            Some(seed) => generate_seeded(profile, &config, seed),
            None => generate(profile, &config, &mut rand::rng()),
        };
        vec![dataset]
    } else {
        generate_batch(&profiles, &config, args.seed.unwrap_or_else(rand::random))
    };

    for (profile, dataset) in profiles.iter().zip(datasets) {
        println!(
            "ANALYSE DES COMPTES COMMUNAUX - {} ({}-{})",
            profile.name, args.start_year, args.end_year
        );
        println!("{}", "=".repeat(60));

        let dataset = dataset.wrap_err_with(|| format!("Generation failed for {}", profile.name))?;
        publish(&args, profile, &dataset)?;
    }

    tracing::info!("Done");
    Ok(())
}
