use clap::{Args, Parser, Subcommand, ValueEnum};
use combat_core::training::BJJ_NOTE;
use combat_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "combat-plan")]
#[command(about = "Combat diet and training planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute today's nutrition and training plan (default)
    Plan(PlanArgs),

    /// Print the 4-day training split
    Split,

    /// Write a config file containing the default profile
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Profile flags; anything omitted comes from the config file's [profile]
#[derive(Args, Default)]
struct PlanArgs {
    /// male or female
    #[arg(long)]
    sex: Option<Sex>,

    /// Age in years (16-65)
    #[arg(long)]
    age: Option<u32>,

    /// Height in cm (140-220)
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg (45-160)
    #[arg(long)]
    weight: Option<f64>,

    /// Body fat percentage (5-40), display only
    #[arg(long, conflicts_with = "no_bodyfat")]
    bodyfat: Option<u32>,

    /// Omit body fat from the plan
    #[arg(long)]
    no_bodyfat: bool,

    /// cut, recomp or slow bulk
    #[arg(long)]
    goal: Option<Goal>,

    /// BJJ sessions per week (0-7)
    #[arg(long)]
    bjj_days: Option<u32>,

    /// Strength sessions per week (0-7)
    #[arg(long)]
    strength_days: Option<u32>,

    /// Cardio sessions per week (0-7)
    #[arg(long)]
    cardio_days: Option<u32>,

    /// Weeks until the next competition (0-24)
    #[arg(long, conflicts_with = "no_event")]
    weeks_to_event: Option<u32>,

    /// No competition scheduled
    #[arg(long)]
    no_event: bool,

    /// Output format for stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the text plan to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write the text plan to the configured export directory
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        combat_core::logging::init_with_level("debug");
    } else {
        combat_core::logging::init();
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_config_path);
    tracing::debug!("Using config path {:?}", config_path);

    let load_config = || match cli.config {
        Some(ref path) => Config::load_or_default(path),
        None => Config::load(),
    };

    match cli.command {
        Some(Commands::Plan(ref args)) => cmd_plan(args, &load_config()?),
        Some(Commands::Split) => cmd_split(),
        Some(Commands::InitConfig { force }) => cmd_init_config(&config_path, force),
        None => {
            // Default to "plan" command
            cmd_plan(&PlanArgs::default(), &load_config()?)
        }
    }
}

/// Overlay command-line flags on the configured defaults
fn resolve_profile(args: &PlanArgs, defaults: &ProfileInput) -> ProfileInput {
    ProfileInput {
        sex: args.sex.unwrap_or(defaults.sex),
        age: args.age.unwrap_or(defaults.age),
        height_cm: args.height.unwrap_or(defaults.height_cm),
        weight_kg: args.weight.unwrap_or(defaults.weight_kg),
        bodyfat_pct: if args.no_bodyfat {
            None
        } else {
            args.bodyfat.or(defaults.bodyfat_pct)
        },
        goal: args.goal.unwrap_or(defaults.goal),
        bjj_days: args.bjj_days.unwrap_or(defaults.bjj_days),
        strength_days: args.strength_days.unwrap_or(defaults.strength_days),
        cardio_days: args.cardio_days.unwrap_or(defaults.cardio_days),
        weeks_to_event: if args.no_event {
            None
        } else {
            args.weeks_to_event.or(defaults.weeks_to_event)
        },
    }
}

fn cmd_plan(args: &PlanArgs, config: &Config) -> Result<()> {
    let profile = resolve_profile(args, &config.profile).validate()?;
    tracing::debug!("Validated profile: {:?}", profile);
    let plan = create_plan(&profile);
    let today = chrono::Local::now().date_naive();
    let text = plan.to_text(&profile, today);

    match args.format {
        OutputFormat::Text => print!("{}", text),
        OutputFormat::Json => println!("{}", to_json(&PlanReport::new(today, &profile, &plan))?),
        OutputFormat::Csv => print!("{}", meals_to_csv(&plan.meal_plan)?),
    }

    if let Some(ref path) = args.export {
        write_export(path, &text)?;
        eprintln!("✓ Plan exported to {}", path.display());
    }

    if args.save {
        let path = config.export.dir.join(default_export_file_name(today));
        write_export(&path, &text)?;
        eprintln!("✓ Plan saved to {}", path.display());
    }

    Ok(())
}

fn cmd_split() -> Result<()> {
    for day in training_split() {
        println!("{}", day.summary_line());
    }
    println!("{}", BJJ_NOTE);
    Ok(())
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
