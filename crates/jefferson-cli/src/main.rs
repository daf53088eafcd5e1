//! Jefferson CLI - Command-line collaborator for the Jefferson disk cipher
//!
//! Fills the role the interactive screen held in earlier renditions of the
//! cipher: it loads or generates a cylinder, obtains a key, drives rotation
//! and ciphering, and persists results to files. All user-facing messaging
//! and logging lives here; the core stays silent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jefferson_core::{cipher_message, decipher_message, sanitize_message, Cylinder, Key, Rotation};

#[derive(Parser)]
#[command(name = "jefferson")]
#[command(about = "Jefferson disk cipher: cylinders, keys, and message ciphering", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cylinder management commands
    #[command(subcommand)]
    Cylinder(CylinderCommands),

    /// Key management commands
    #[command(subcommand)]
    Key(KeyCommands),

    /// Encipher a message with a cylinder and key
    Encipher {
        /// Cylinder file
        #[arg(short = 'f', long)]
        cylinder: PathBuf,

        /// Key: comma-separated disk identifiers, or @file.json
        #[arg(short, long)]
        key: String,

        /// Message to encipher (sanitized and uppercased first)
        #[arg(short, long)]
        message: String,

        /// Write the ciphertext to this file as a single line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decipher a message with a cylinder and key
    Decipher {
        /// Cylinder file
        #[arg(short = 'f', long)]
        cylinder: PathBuf,

        /// Key: comma-separated disk identifiers, or @file.json
        #[arg(short, long)]
        key: String,

        /// Ciphertext to decipher
        #[arg(short, long)]
        message: String,

        /// Write the clear text to this file as a single line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CylinderCommands {
    /// Generate a fresh cylinder and write it to a file
    Generate {
        /// Number of disks
        #[arg(short = 'n', long)]
        count: usize,

        /// Output cylinder file
        #[arg(short, long)]
        output: PathBuf,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the disks of a cylinder file
    Show {
        /// Cylinder file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Rotate one disk of a cylinder file in place
    Rotate {
        /// Cylinder file
        #[arg(short, long)]
        file: PathBuf,

        /// Disk identifier (1-based)
        #[arg(short, long)]
        disk: usize,

        /// Rotation direction
        #[arg(long, value_enum)]
        direction: Direction,
    },
}

#[derive(Subcommand)]
enum KeyCommands {
    /// Generate a random key
    Generate {
        /// Number of disks the key must cover
        #[arg(short = 'n', long)]
        count: usize,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,

        /// Store the key as JSON instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a key is a permutation of 1..=N
    Check {
        /// Key: comma-separated disk identifiers, or @file.json
        #[arg(short, long)]
        key: String,

        /// Number of disks the key must cover
        #[arg(short = 'n', long)]
        count: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for Rotation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Rotation::Up,
            Direction::Down => Rotation::Down,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jefferson=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cylinder(cmd) => handle_cylinder_command(cmd),
        Commands::Key(cmd) => handle_key_command(cmd),
        Commands::Encipher {
            cylinder,
            key,
            message,
            output,
        } => handle_cipher_command(&cylinder, &key, &message, output.as_deref(), cipher_message),
        Commands::Decipher {
            cylinder,
            key,
            message,
            output,
        } => handle_cipher_command(&cylinder, &key, &message, output.as_deref(), decipher_message),
    }
}

fn handle_cylinder_command(cmd: CylinderCommands) -> Result<()> {
    match cmd {
        CylinderCommands::Generate {
            count,
            output,
            seed,
        } => {
            let mut rng = rng_from_seed(seed);
            let cylinder = Cylinder::generate(count, &mut rng)?;
            cylinder
                .write_to_file(&output)
                .with_context(|| format!("writing cylinder to {}", output.display()))?;
            info!(count, "generated cylinder");

            println!("✓ Cylinder written to {}", output.display());
            println!("  Disks: {}", cylinder.len());
        }

        CylinderCommands::Show { file } => {
            let cylinder = load_cylinder(&file)?;
            for id in 1..=cylinder.len() {
                println!("{:>3}  {}", id, cylinder.disk(id)?);
            }
        }

        CylinderCommands::Rotate {
            file,
            disk,
            direction,
        } => {
            let mut cylinder = load_cylinder(&file)?;
            cylinder.rotate_disk(disk, direction.into())?;
            cylinder
                .write_to_file(&file)
                .with_context(|| format!("writing cylinder to {}", file.display()))?;
            debug!(disk, ?direction, "rotated disk");

            println!("✓ Disk {} rotated {:?}", disk, direction);
            println!("  Now: {}", cylinder.disk(disk)?);
        }
    }

    Ok(())
}

fn handle_key_command(cmd: KeyCommands) -> Result<()> {
    match cmd {
        KeyCommands::Generate {
            count,
            seed,
            output,
        } => {
            let mut rng = rng_from_seed(seed);
            let key = Key::generate(count, &mut rng)?;

            match output {
                Some(path) => {
                    let json = serde_json::to_string(&key)?;
                    fs::write(&path, json)
                        .with_context(|| format!("writing key to {}", path.display()))?;
                    println!("✓ Key written to {}", path.display());
                }
                None => println!("{}", format_key(&key)),
            }
        }

        KeyCommands::Check { key, count } => {
            let key = parse_key(&key)?;
            if !key.is_valid_for(count) {
                bail!(
                    "key of length {} is not a permutation of 1..={}",
                    key.len(),
                    count
                );
            }
            println!("✓ Key is valid for {} disks", count);
        }
    }

    Ok(())
}

fn handle_cipher_command(
    cylinder_file: &Path,
    key_spec: &str,
    message: &str,
    output: Option<&Path>,
    transform: fn(&str, &Key, &Cylinder) -> jefferson_core::Result<String>,
) -> Result<()> {
    let cylinder = load_cylinder(cylinder_file)?;
    let key = parse_key(key_spec)?;
    let message = prepare_message(message);
    debug!(len = message.len(), "prepared message");

    let result = transform(&message, &key, &cylinder)?;

    match output {
        // A single line, no trailing metadata.
        Some(path) => {
            fs::write(path, &result)
                .with_context(|| format!("writing message to {}", path.display()))?;
            println!("✓ Message written to {}", path.display());
        }
        None => println!("{result}"),
    }

    Ok(())
}

fn load_cylinder(file: &Path) -> Result<Cylinder> {
    let cylinder = Cylinder::read_from_file(file)
        .with_context(|| format!("loading cylinder from {}", file.display()))?;
    debug!(disks = cylinder.len(), "loaded cylinder");
    Ok(cylinder)
}

/// Build a key from `3,2,5,1,4` or from `@key.json`
fn parse_key(spec: &str) -> Result<Key> {
    if let Some(path) = spec.strip_prefix('@') {
        let json =
            fs::read_to_string(path).with_context(|| format!("loading key from {path}"))?;
        return serde_json::from_str(&json).with_context(|| format!("parsing key file {path}"));
    }

    let ids = spec
        .split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing key {spec:?}"))?;
    Ok(Key::from(ids))
}

fn format_key(key: &Key) -> String {
    key.as_slice()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// The cipher takes uppercase letters only; everything else is shed here
fn prepare_message(message: &str) -> String {
    sanitize_message(message).to_uppercase()
}

fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
