use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use labyrinth_cli::output::{render, ColorChoice, OutputFormat};
use labyrinth_lib::{solve, Charset, Grid, GridLimits, SolveOutcome, SolverConfig, Traversal};

const LONG_ABOUT: &str = "\
Find the shortest path from 'A' to 'B' in a labyrinth and mark it with '.'.

The labyrinth is a grid of characters, one row per line: 'A' is the start,
'B' the goal, '#' a wall and ' ' open floor. Rows may differ in length.
Only floor cells on the path are overwritten. The maximum labyrinth size is
100x100; lines after the hundredth are ignored.

Without arguments the labyrinth is read from stdin and written to stdout.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Mark the shortest path through a labyrinth", long_about = LONG_ABOUT)]
struct Cli {
    /// Labyrinth file to read; stdin when omitted.
    input: Option<PathBuf>,

    /// File to write the annotated labyrinth to; stdout when omitted.
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,

    /// Highlight the path, markers and walls with ANSI colors.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Print the wave-front distance map to stderr.
    #[arg(long)]
    distances: bool,

    /// Treat any character other than floor and the markers as a wall.
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    charset: CharsetArgs,
}

#[derive(Args, Debug)]
struct CharsetArgs {
    /// Start marker character.
    #[arg(long, default_value_t = 'A')]
    start: char,
    /// Goal marker character.
    #[arg(long, default_value_t = 'B')]
    goal: char,
    /// Wall character.
    #[arg(long, default_value_t = '#')]
    wall: char,
    /// Open floor character.
    #[arg(long, default_value_t = ' ')]
    floor: char,
    /// Character written onto floor cells along the path.
    #[arg(long, default_value_t = '.')]
    mark: char,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            charset: Charset {
                start: self.charset.start,
                goal: self.charset.goal,
                wall: self.charset.wall,
                floor: self.charset.floor,
                mark: self.charset.mark,
            },
            limits: GridLimits::default(),
            traversal: if self.strict {
                Traversal::Strict
            } else {
                Traversal::Permissive
            },
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.solver_config();

    let mut grid = load_grid(cli.input.as_deref(), config.limits)?;
    let outcome = solve(&mut grid, &config).context("failed to solve labyrinth")?;

    if cli.distances {
        eprint!("{}", outcome.distances());
    }
    if let SolveOutcome::NoPath { .. } = outcome {
        eprintln!(
            "No path found between '{}' and '{}'",
            config.charset.start, config.charset.goal
        );
    }

    let palette = cli.color.palette(cli.output.is_none());
    let rendered = render(&grid, &outcome, &config.charset, cli.format, palette)
        .context("failed to render labyrinth")?;
    write_output(cli.output.as_deref(), &rendered)
}

fn load_grid(input: Option<&Path>, limits: GridLimits) -> Result<Grid> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "reading labyrinth");
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Grid::load(BufReader::new(file), limits)
                .with_context(|| format!("failed to load labyrinth from {}", path.display()))
        }
        None => {
            debug!("reading labyrinth from stdin");
            Grid::load(io::stdin().lock(), limits).context("failed to load labyrinth from stdin")
        }
    }
}

fn write_output(target: Option<&Path>, rendered: &str) -> Result<()> {
    match target {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            file.write_all(rendered.as_bytes())
                .with_context(|| format!("failed to write output file {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
