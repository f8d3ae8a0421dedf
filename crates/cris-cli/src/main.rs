//! CLI frontend for the C.R.I.S. roll engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cris_mechanics::{Attribute, RollRequest};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "cris",
    about = "C.R.I.S. character sheets and d20 pool rolls",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log every roll and fallback to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new sheet with the default skill list
    New {
        /// Sheet file to create
        file: PathBuf,

        /// Character name (default: file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print a sheet
    Show {
        /// Sheet file
        file: PathBuf,
    },

    /// Roll an attribute, skill or attack from a sheet
    Roll {
        /// Sheet file
        file: PathBuf,

        #[command(subcommand)]
        target: RollTarget,

        /// RNG seed for reproducible rolls
        #[arg(short, long, global = true)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long, global = true)]
        json: bool,
    },

    /// Roll a dice expression such as 2d6+1
    Dice {
        /// Dice expression
        #[arg(allow_hyphen_values = true)]
        expr: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a sheet and report issues
    Check {
        /// Sheet file
        file: PathBuf,
    },

    /// Deep-merge a JSON patch into a sheet
    Patch {
        /// Sheet file
        file: PathBuf,

        /// Patch file, or `-` to read from stdin
        patch: String,

        /// Write the result here instead of over the sheet
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append an attack to a sheet
    AddAttack {
        /// Sheet file
        file: PathBuf,

        /// Attack name
        #[arg(long)]
        name: Option<String>,

        /// Damage expression, e.g. 1d8+2
        #[arg(long)]
        damage: Option<String>,

        /// Critical expression, e.g. 19/x2
        #[arg(long)]
        crit: Option<String>,

        /// To-hit attribute (FOR, AGI, INT, PRE, VIG)
        #[arg(long, value_parser = parse_attribute)]
        attr: Option<Attribute>,

        /// Skill whose bonus applies to the to-hit roll
        #[arg(long)]
        skill: Option<String>,

        /// Damage type label
        #[arg(long)]
        damage_type: Option<String>,
    },
}

#[derive(Subcommand)]
enum RollTarget {
    /// Raw attribute check
    Attr {
        /// Attribute code (FOR, AGI, INT, PRE, VIG)
        #[arg(value_parser = parse_attribute)]
        code: Attribute,
    },
    /// Skill check
    Skill {
        /// Skill name, exactly as on the sheet
        name: String,
    },
    /// Attack with damage
    Attack {
        /// Attack name or id
        name: String,
    },
}

fn parse_attribute(code: &str) -> Result<Attribute, String> {
    code.parse().map_err(|e: cris_mechanics::MechError| e.to_string())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cris=debug,cris_mechanics=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::New { file, name, force } => commands::new::run(&file, name.as_deref(), force),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Roll {
            file,
            target,
            seed,
            json,
        } => {
            let request = match target {
                RollTarget::Attr { code } => RollRequest::Attribute(code),
                RollTarget::Skill { name } => RollRequest::Skill(name),
                RollTarget::Attack { name } => RollRequest::Attack(name),
            };
            commands::roll::run(&file, &request, seed, json)
        }
        Commands::Dice { expr, seed, json } => commands::dice::run(&expr, seed, json),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Patch {
            file,
            patch,
            output,
        } => commands::patch::run(&file, &patch, output.as_deref()),
        Commands::AddAttack {
            file,
            name,
            damage,
            crit,
            attr,
            skill,
            damage_type,
        } => {
            let patch = cris_mechanics::AttackPatch {
                name,
                damage,
                crit,
                damage_type,
                attr,
                skill,
                description: None,
            };
            commands::add_attack::run(&file, &patch)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
