#![forbid(unsafe_code)]

//! `hello` command-line front end for the hello_bites helpers.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hello_bites::{
    Bite, greet_arrow, greet_require_name, greet_with_check, greet_with_default, to_celsius,
};

/// Greetings, temperatures and bites
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Greet someone, or a stranger
    Greet {
        /// Who to greet
        name: Option<String>,

        /// Which greeting formatter to use
        #[arg(long, value_enum, default_value_t = Style::Default)]
        style: Style,
    },
    /// Convert a Fahrenheit reading to Celsius
    Celsius {
        #[arg(allow_negative_numbers = true)]
        fahrenheit: f64,
    },
    /// Print each argument on its own line
    PrintArgs {
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Describe a bite
    Bite {
        #[arg(long, default_value_t = 1)]
        number: u32,
        #[arg(long, default_value = "sum of numbers")]
        title: String,
        #[arg(long, default_value_t = 2)]
        points: u32,
    },
    /// Run every helper once with sample inputs
    Tour,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    /// Name required, result returned then printed
    Require,
    /// Explicit check for a missing name
    Check,
    /// Default applied at the call boundary
    Default,
    /// Expression form, result returned then printed
    Arrow,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn greet<W: Write>(out: &mut W, name: Option<&str>, style: Style) -> hello_bites::Result<()> {
    match style {
        Style::Require => writeln!(out, "{}", greet_require_name(name))?,
        Style::Check => greet_with_check(out, name)?,
        Style::Default => greet_with_default(out, name)?,
        Style::Arrow => writeln!(out, "{}", greet_arrow(name))?,
    }
    Ok(())
}

fn tour<W: Write>(out: &mut W) -> hello_bites::Result<()> {
    writeln!(out, "{}", greet_require_name(None))?;
    writeln!(out, "{}", to_celsius(212.0))?;
    hello_bites::print_arguments!(out, 1, "a", true)?;
    greet_with_check(out, None)?;
    greet_with_default(out, Some("Ada"))?;
    writeln!(out, "{}", greet_arrow(Some("Grace")))?;
    Bite::new(1, "sum of numbers", 2).describe(out)?;
    Ok(())
}

fn run<W: Write>(out: &mut W, command: Command) -> hello_bites::Result<()> {
    match command {
        Command::Greet { name, style } => greet(out, name.as_deref(), style),
        Command::Celsius { fahrenheit } => {
            writeln!(out, "{}", to_celsius(fahrenheit))?;
            Ok(())
        }
        Command::PrintArgs { args } => {
            let values: Vec<&dyn std::fmt::Display> =
                args.iter().map(|a| a as &dyn std::fmt::Display).collect();
            hello_bites::arguments::print_arguments(out, &values)
        }
        Command::Bite {
            number,
            title,
            points,
        } => Bite::new(number, title, points).describe(out),
        Command::Tour => tour(out),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    info!(command = ?args.command, "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, args.command).context("hello failed")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
