//! relgen: render relational statements as SQL
//!
//! # Usage
//!
//! ```bash
//! # Render a statement stored as JSON
//! relgen render query.json --dialect postgres
//!
//! # Render a DDL batch
//! relgen ddl schema.json --dialect oracle
//!
//! # Next-value query of a sequence
//! relgen sequence address_seq --dialect derby
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use relgen::config::Config;
use relgen::prelude::*;
use relgen::transpiler::dialect::{ConcatStyle, LocateStyle, SequenceStyle, TableAliasStyle};

#[derive(Parser)]
#[command(name = "relgen")]
#[command(version)]
#[command(about = "Render relational statements as dialect-specific SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    relgen render select.json --dialect oracle
    relgen ddl schema.json
    relgen sequence address_seq --dialect postgres
    relgen dialects")]
struct Cli {
    /// Target dialect (overrides the configuration file)
    #[arg(short, long, global = true, env = "RELGEN_DIALECT")]
    dialect: Option<Dialect>,

    /// Configuration file (default: ./relgen.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one statement from a JSON file
    Render {
        /// JSON-encoded statement
        file: PathBuf,
    },
    /// Render a JSON array of DDL statements
    Ddl {
        /// JSON-encoded DDL batch
        file: PathBuf,
    },
    /// Print the query fetching a sequence's next value
    Sequence {
        /// Sequence name
        name: String,
    },
    /// Show how the dialects differ
    Dialects,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "relgen=debug",
        _ => "relgen=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };
    let dialect = cli.dialect.unwrap_or(config.generator.dialect);
    let generator = StatementGenerator::new(dialect);

    match &cli.command {
        Commands::Render { file } => render(&generator, file, &config),
        Commands::Ddl { file } => ddl(&generator, file, &config),
        Commands::Sequence { name } => {
            let sql = generator.sequence_next_value(name)?;
            println!("{}{}", sql, config.output.terminator);
            Ok(())
        }
        Commands::Dialects => {
            show_dialects();
            Ok(())
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(file: &Path) -> Result<T> {
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to decode {}", file.display()))
}

fn render(generator: &StatementGenerator, file: &Path, config: &Config) -> Result<()> {
    let statement: Statement = read_json(file)?;

    let rendered = generator.export_with_params(&statement)?;
    println!("{}{}", rendered.sql, config.output.terminator);

    if config.output.show_parameters && !rendered.parameters.is_empty() {
        println!();
        println!("{}", "Parameters:".cyan());
        for (i, param) in rendered.parameters.iter().enumerate() {
            println!("  {} = {}", (i + 1).to_string().dimmed(), param.to_string().yellow());
        }
    }
    Ok(())
}

fn ddl(generator: &StatementGenerator, file: &Path, config: &Config) -> Result<()> {
    let statements: Vec<DdlStatement> = read_json(file)?;
    for sql in generator.export_ddl(&statements)? {
        println!("{}{}", sql, config.output.terminator);
    }
    Ok(())
}

fn show_dialects() {
    println!(
        "{:10} {:12} {:18} {:14} {:10} {}",
        "Dialect".white().bold(),
        "Table alias".white().bold(),
        "String search".white().bold(),
        "Concat".white().bold(),
        "Booleans".white().bold(),
        "Sequences".white().bold()
    );
    println!("{}", "─".repeat(78).dimmed());

    for dialect in Dialect::ALL {
        let config = dialect.config();
        let alias = match config.table_alias {
            TableAliasStyle::As => "T AS a",
            TableAliasStyle::Bare => "T a",
        };
        let search = match config.locate {
            LocateStyle::Locate => "LOCATE(p, t)",
            LocateStyle::Instr => "INSTR(t, p)",
            LocateStyle::Position => "POSITION(p IN t)",
        };
        let concat = match config.concat {
            ConcatStyle::Function => "CONCAT(a, b)",
            ConcatStyle::Operator => "a || b",
        };
        let booleans = format!("{}/{}", config.boolean(true), config.boolean(false));
        let sequences = match config.sequences {
            SequenceStyle::Unsupported => "no".red(),
            _ => "yes".green(),
        };
        println!(
            "{:10} {:12} {:18} {:14} {:10} {}",
            dialect.to_string().cyan(),
            alias,
            search,
            concat,
            booleans,
            sequences
        );
    }
}
