//! tabstops - Convert column-aligned text between layouts

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tabstops::config::{Config, Format};
use tabstops::output::render;
use tabstops::parser::parse;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Spaces,
    Fixed,
    Elastic,
    Json,
}

impl From<CliFormat> for Format {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Spaces => Format::Spaces,
            CliFormat::Fixed => Format::FixedTabstops,
            CliFormat::Elastic => Format::ElasticTabstops,
            CliFormat::Json => Format::Json,
        }
    }
}

/// Convert column-aligned text between spaces, fixed tabstops, and elastic tabstops
#[derive(Parser, Debug)]
#[command(name = "tabstops")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Format of the input
    #[arg(short = 'f', long = "from", value_enum)]
    from: CliFormat,

    /// Format of the output
    #[arg(short = 't', long = "to", value_enum)]
    to: CliFormat,

    /// Tab width (must be 2 or greater)
    #[arg(short = 'w', long, default_value_t = 8)]
    tab_width: usize,

    /// Pad space-aligned cells to multiples of the tab width
    #[arg(long)]
    multiples_of_tab_width: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let config = Config::new(cli.tab_width)
        .with_multiples_of_tab_width(cli.multiples_of_tab_width);

    let table = parse(&text, cli.from.into(), &config).context("Failed to parse input")?;
    let output = render(&table, cli.to.into(), &config).context("Failed to render output")?;

    println!("{}", output);
    Ok(())
}
