//! `sweeper-sfx`: inspect, export and check the Minesweeper sound table.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sweeper_sfx::sound_fx::{audible_ticks, playable_steps, total_ticks};
use sweeper_sfx::{table, SfxId};

#[derive(Parser)]
#[command(name = "sweeper-sfx")]
#[command(about = "Inspect and export the Minesweeper sound-effect tables")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every effect with its length
    List,

    /// Print the steps of one effect
    Show {
        /// Effect symbol or short name (e.g. SFX_HOME, home)
        name: String,
    },

    /// Export the table
    #[cfg(feature = "export")]
    Export {
        /// Output format: json, csv, header or binary
        #[arg(short, long, default_value = "json")]
        format: sweeper_sfx::ExportFormat,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,

        /// Only export these effects (repeatable)
        #[arg(short, long = "effect")]
        effects: Vec<SfxId>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the built-in table, or verify a header file against it
    Check {
        /// Sound header to compare with the table
        file: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn list() {
    println!(
        "{:<16} {:>5} {:>6} {:>7}  terminated",
        "effect", "steps", "ticks", "audible"
    );
    for (id, steps) in table::iter() {
        println!(
            "{:<16} {:>5} {:>6} {:>7}  {}",
            id.symbol(),
            steps.len(),
            total_ticks(steps),
            audible_ticks(steps),
            if id.expects_terminator() { "yes" } else { "no" }
        );
    }
}

fn show(name: &str) -> Result<()> {
    let id: SfxId = name.parse()?;
    let steps = id.steps();
    let playable = playable_steps(steps).len();

    println!("{} ({}), {} tick(s)", id.symbol(), id.name(), total_ticks(steps));
    println!(
        "{:>3}  {:<6} {:>3} {:>6} {:>6} {:>6} {:>5} {:>5}",
        "#", "wave", "arp", "vol", "slide0", "slide1", "pitch", "ticks"
    );
    for (i, s) in steps.iter().enumerate() {
        let note = if i >= playable {
            "  stop"
        } else if s.is_rest() {
            "  rest"
        } else if !s.is_audible() {
            "  silent"
        } else {
            ""
        };
        println!(
            "{:>3}  {:<6} {:>3} {:>6} {:>6} {:>6} {:>5} {:>5}{}",
            i,
            s.waveform,
            u8::from(s.arpeggio),
            s.volume,
            s.volume_slide_start,
            s.volume_slide_end,
            s.pitch,
            s.duration_ticks,
            note
        );
    }
    Ok(())
}

#[cfg(feature = "export")]
fn export(
    format: sweeper_sfx::ExportFormat,
    compact: bool,
    effects: Vec<SfxId>,
    output: Option<PathBuf>,
) -> Result<()> {
    let options = sweeper_sfx::ExportOptions {
        format,
        pretty: !compact,
        effects: if effects.is_empty() {
            None
        } else {
            Some(effects)
        },
    };
    let data = sweeper_sfx::export(&options)?;

    match output {
        Some(path) => {
            fs::write(&path, &data)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            log::info!("wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Returns `false` when problems were found.
fn check(file: Option<PathBuf>) -> Result<bool> {
    let Some(path) = file else {
        let problems = table::validate_all();
        for (id, err) in &problems {
            log::error!("{id}: {err}");
        }
        if problems.is_empty() {
            println!("table ok: {} effects", SfxId::ALL.len());
        }
        return Ok(problems.is_empty());
    };

    check_header(&path)
}

#[cfg(feature = "text-format")]
fn check_header(path: &std::path::Path) -> Result<bool> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let decls = sweeper_sfx::parse_header(&text)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    let mismatches = sweeper_sfx::verify_against_table(&decls);

    for m in &mismatches {
        log::error!("{m}");
    }
    if mismatches.is_empty() {
        println!("{} matches the table", path.display());
    }
    Ok(mismatches.is_empty())
}

#[cfg(not(feature = "text-format"))]
fn check_header(_path: &std::path::Path) -> Result<bool> {
    anyhow::bail!("checking a header requires the \"text-format\" feature")
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::List => list(),
        Command::Show { name } => show(&name)?,
        #[cfg(feature = "export")]
        Command::Export {
            format,
            compact,
            effects,
            output,
        } => export(format, compact, effects, output)?,
        Command::Check { file } => return check(file),
    }
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
