use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use flowcnf::dimacs::write_dimacs_with_comments;
use flowcnf::render::{colored_grid, direction_table};
use flowcnf::{EncoderConfig, Grid, GridEncoder};
use tracing::info;

/// Turns Flow Free style puzzles into DIMACS CNF.
#[derive(Parser, Debug)]
#[command(name = "flowcnf", version, about)]
struct Cli {
    /// Raise the log level; repeat for more detail. `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a puzzle and write the formula in DIMACS format.
    Encode {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// File to write to instead of standard output.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out the leading `c` comment lines.
        #[arg(long, default_value_t = false)]
        no_comments: bool,
    },

    /// Print the parsed puzzle.
    Show {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Paint endpoints with their ANSI background colors.
        #[arg(long, default_value_t = false)]
        color: bool,
    },

    /// List the direction variables of every non-endpoint cell.
    Vars {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },

    /// Print variable and clause counts.
    Stats {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
}

/// Options for reading a puzzle, shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct PuzzleArgs {
    /// Puzzle file: one line per row, letters for endpoints and `.` for empty cells.
    path: PathBuf,

    /// Accept grids whose width and height differ.
    #[arg(long, default_value_t = false)]
    allow_rectangular: bool,
}

impl PuzzleArgs {
    fn config(&self) -> EncoderConfig {
        match self.allow_rectangular {
            true => EncoderConfig::rectangular(),
            false => EncoderConfig::default(),
        }
    }

    fn load(&self) -> anyhow::Result<Grid> {
        Grid::load(&self.path).with_context(|| format!("could not load {}", self.path.display()))
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn header_comments(path: &Path, grid: &Grid, encoder: &GridEncoder) -> Vec<String> {
    let color_count = encoder.color_variables().count();
    let symbols = grid.colors().iter().map(|(_, symbol)| symbol).collect::<String>();

    vec![
        format!("flowcnf encoding of {}", path.display()),
        format!("{}x{} grid, {} colors: {}", grid.width(), grid.height(), grid.colors().len(), symbols),
        format!("color variables 1..={}", color_count),
        format!(
            "direction variables {}..={}",
            color_count + 1,
            encoder.direction_variables().last_id()
        ),
    ]
}

fn encode(puzzle: &PuzzleArgs, output: Option<&Path>, no_comments: bool) -> anyhow::Result<()> {
    let grid = puzzle.load()?;
    let encoder = GridEncoder::new(&grid, puzzle.config())
        .with_context(|| format!("cannot encode {}", puzzle.path.display()))?;
    let encoding = encoder.encode();

    let comments = match no_comments {
        true => Vec::new(),
        false => header_comments(&puzzle.path, &grid, &encoder),
    };

    let mut target: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_dimacs_with_comments(&mut target, &encoding, &comments)?;
    target.flush()?;

    info!(
        variables = encoding.variable_count(),
        clauses = encoding.clause_count(),
        "wrote encoding"
    );
    Ok(())
}

fn stats(puzzle: &PuzzleArgs) -> anyhow::Result<()> {
    let grid = puzzle.load()?;
    let encoding = flowcnf::encode(&grid, puzzle.config())?;

    println!("grid: {}x{}, {} colors", grid.width(), grid.height(), grid.colors().len());
    println!("color variables: {}", encoding.color_variable_count());
    println!("direction variables: {}", encoding.direction_variable_count());
    println!("color clauses: {}", encoding.color_clauses().len());
    println!("direction clauses: {}", encoding.direction_clauses().len());
    println!("total: {} variables, {} clauses", encoding.variable_count(), encoding.clause_count());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Encode { puzzle, output, no_comments } => encode(puzzle, output.as_deref(), *no_comments),
        Commands::Show { puzzle, color } => {
            let grid = puzzle.load()?;
            match *color {
                true => print!("{}", colored_grid(&grid)),
                false => print!("{}", grid),
            }
            Ok(())
        }
        Commands::Vars { puzzle } => {
            let grid = puzzle.load()?;
            let encoder = GridEncoder::new(&grid, puzzle.config())?;
            print!("{}", direction_table(encoder.direction_variables()));
            Ok(())
        }
        Commands::Stats { puzzle } => stats(puzzle),
    }
}
