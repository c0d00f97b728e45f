//! # Tube Weight CLI
//!
//! Command-line front end for `tube_core`.
//!
//! ```text
//! tube_cli calc --shape round --od 2 --dim-unit in --thickness 0.1 --thickness-unit in \
//!               --length 20 --length-unit ft
//! tube_cli batch tubes.json --json
//! tube_cli settings --init
//! ```
//!
//! Units not given on the command line come from the settings file
//! (`--config`, default `tube_settings.json`), then from built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use tube_core::calculations::{calculate, CalculationResult, RawDimension, RawProfile, RawRunLength, TubeInput};
use tube_core::errors::CalcError;
use tube_core::file_io::{load_batch, load_settings_or_default, save_settings};
use tube_core::profile::ShapeKind;
use tube_core::settings::CalcSettings;
use tube_core::units::{LengthUnit, RunUnit};

#[derive(Debug, Parser)]
#[command(name = "tube_cli", version, about = "Hollow steel tube weight calculator")]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = "tube_settings.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate a single tube
    Calc(CalcArgs),
    /// Calculate every tube in a JSON file
    Batch {
        /// JSON array of tube inputs
        file: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective settings
    Settings {
        /// Write default settings to the config path
        #[arg(long)]
        init: bool,
        /// Overwrite an existing settings file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Debug, Args)]
struct CalcArgs {
    /// round, square or rectangle
    #[arg(long)]
    shape: ShapeKind,

    /// Outer diameter (round)
    #[arg(long, allow_hyphen_values = true)]
    od: Option<String>,

    /// Outer side (square)
    #[arg(long, allow_hyphen_values = true)]
    side: Option<String>,

    /// Outer width (rectangle)
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,

    /// Outer height (rectangle)
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Wall thickness
    #[arg(long, allow_hyphen_values = true)]
    thickness: String,

    /// Unit for outer dimensions (in, mm, ft, m)
    #[arg(long)]
    dim_unit: Option<LengthUnit>,

    /// Unit for wall thickness (in, mm, ft, m)
    #[arg(long)]
    thickness_unit: Option<LengthUnit>,

    /// Run length for a total weight
    #[arg(long, allow_hyphen_values = true)]
    length: Option<String>,

    /// Unit for run length (ft, m)
    #[arg(long)]
    length_unit: Option<RunUnit>,

    /// Report weight per foot or per meter (ft, m); defaults to the length unit
    #[arg(long)]
    weight_unit: Option<RunUnit>,

    /// Label shown in the report
    #[arg(long, default_value = "")]
    label: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    /// Build the engine input, filling units from settings.
    fn to_input(&self, settings: &CalcSettings) -> Result<TubeInput, CalcError> {
        let dim_unit = self.dim_unit.unwrap_or(settings.dimension_unit);
        let thickness = RawDimension::new(&self.thickness, self.thickness_unit.unwrap_or(settings.thickness_unit));
        let outer = |value: &Option<String>, flag: &str| {
            value
                .as_ref()
                .map(|text| RawDimension::new(text, dim_unit))
                .ok_or_else(|| CalcError::missing_field(flag))
        };

        let profile = match self.shape {
            ShapeKind::Round => RawProfile::Round {
                outer_diameter: outer(&self.od, "--od")?,
                thickness,
            },
            ShapeKind::Square => RawProfile::Square {
                side: outer(&self.side, "--side")?,
                thickness,
            },
            ShapeKind::Rectangle => RawProfile::Rectangle {
                width: outer(&self.width, "--width")?,
                height: outer(&self.height, "--height")?,
                thickness,
            },
        };

        let length_unit = self.length_unit.unwrap_or(settings.run_unit);
        let weight_unit = self
            .weight_unit
            .or(self.length_unit)
            .unwrap_or(settings.run_unit);

        Ok(TubeInput {
            label: self.label.clone(),
            profile,
            length: self
                .length
                .as_ref()
                .map(|text| RawRunLength::new(text, length_unit)),
            weight_unit,
        })
    }
}

#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    label: &'a str,
    shape: ShapeKind,
    #[serde(flatten)]
    result: CalculationResult,
}

/// Install a stderr subscriber honoring `RUST_LOG` (default `warn`).
fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Calc(args) => {
            let settings = load_settings_or_default(&cli.config)?;
            let input = match args.to_input(&settings) {
                Ok(input) => input,
                Err(e) => return report_error(e, args.json),
            };
            let result = calculate(&input);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&input, &result, settings.precision());
            }
        }
        Command::Batch { file, json } => {
            let settings = load_settings_or_default(&cli.config)?;
            run_batch(&file, json, settings.precision())?;
        }
        Command::Settings { init, force } => {
            if init {
                if cli.config.exists() && !force {
                    bail!("{} already exists (use --force to overwrite)", cli.config.display());
                }
                save_settings(&CalcSettings::default(), &cli.config)
                    .with_context(|| format!("writing {}", cli.config.display()))?;
                println!("Wrote default settings to {}", cli.config.display());
            }
            let settings = load_settings_or_default(&cli.config)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}

fn report_error(error: CalcError, json: bool) -> Result<()> {
    if json {
        if let Ok(text) = serde_json::to_string_pretty(&error) {
            eprintln!("{}", text);
        }
    }
    Err(error.into())
}

fn run_batch(file: &Path, json: bool, precision: usize) -> Result<()> {
    let inputs = load_batch(file)?;
    tracing::info!(count = inputs.len(), file = %file.display(), "running batch");

    let entries: Vec<BatchEntry> = inputs
        .iter()
        .map(|input| BatchEntry {
            label: &input.label,
            shape: input.profile.kind(),
            result: calculate(input),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        let label = if entry.label.is_empty() {
            format!("#{}", index + 1)
        } else {
            entry.label.to_string()
        };
        println!("{:<20} {:<18} {}", label, entry.shape.display_name(), summary(&entry.result, precision));
    }
    Ok(())
}

/// One-line weight summary, or the validity note when invalid.
fn summary(result: &CalculationResult, precision: usize) -> String {
    if !result.valid {
        return format!("[INVALID] {}", validity_note(result));
    }
    let mut line = format!("{:.*} {}", precision, result.weight_per_unit, result.unit_label);
    if result.has_total() {
        line.push_str(&format!(", total {:.*} kg", precision, result.total_weight));
    }
    line
}

fn validity_note(result: &CalculationResult) -> String {
    match &result.issue {
        Some(issue) => issue.to_string(),
        None if result.valid => "OK".to_string(),
        None => "invalid input".to_string(),
    }
}

fn print_report(input: &TubeInput, result: &CalculationResult, precision: usize) {
    println!("═══════════════════════════════════════");
    println!("  TUBE WEIGHT");
    println!("═══════════════════════════════════════");
    if !input.label.is_empty() {
        println!("  Label:    {}", input.label);
    }
    println!("  Shape:    {}", input.profile.kind());
    match &input.profile {
        RawProfile::Round {
            outer_diameter,
            thickness,
        } => {
            println!("  OD:       {} {}", outer_diameter.text, outer_diameter.unit);
            println!("  Wall:     {} {}", thickness.text, thickness.unit);
        }
        RawProfile::Square { side, thickness } => {
            println!("  Side:     {} {}", side.text, side.unit);
            println!("  Wall:     {} {}", thickness.text, thickness.unit);
        }
        RawProfile::Rectangle {
            width,
            height,
            thickness,
        } => {
            println!("  Width:    {} {}", width.text, width.unit);
            println!("  Height:   {} {}", height.text, height.unit);
            println!("  Wall:     {} {}", thickness.text, thickness.unit);
        }
    }
    if let Some(length) = &input.length {
        println!("  Length:   {} {}", length.text, length.unit);
    }
    println!();

    if result.valid {
        println!("  Area:     {:.*} mm²", precision, result.area_mm2);
        println!("  Weight:   {:.*} {}", precision, result.weight_per_unit, result.unit_label);
        if result.has_total() {
            println!("  Total:    {:.*} kg", precision, result.total_weight);
        } else {
            println!("  Total:    - ({})", validity_note(result));
        }
    }
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if result.valid {
            "[OK]".to_string()
        } else {
            format!("[INVALID] {}", validity_note(result))
        }
    );
    println!("═══════════════════════════════════════");
}
