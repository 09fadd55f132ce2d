use anyhow::Context;
use anyhow::bail;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeboard::BoardConfig;
use lifeboard::Coord;
use lifeboard::RuleSet;
use lifeboard::camera::Camera;
use lifeboard::config::DEFAULT_HEIGHT;
use lifeboard::config::DEFAULT_WIDTH;
use lifeboard::patterns;

/// Run a Life-like cellular automaton and print the resulting generation.
#[derive(Parser)]
#[command(name = "lifeboard")]
struct Args {
    /// Number of cells in a row.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of cells in a column.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Wrap the edges of the board around, as a torus.
    #[arg(long)]
    wrap: bool,

    /// Rule in B/S notation, e.g. B36/S23.
    #[arg(long, default_value_t = RuleSet::default())]
    rule: RuleSet,

    /// Seed pattern placed at the centre of the board, or `none` for an empty board.
    #[arg(long, default_value = "r-pentomino")]
    pattern: String,

    /// Number of generations to run.
    #[arg(long, short = 'n', default_value_t = 0)]
    generations: u64,

    /// Print the board as braille instead of `#` and `.`.
    #[arg(long)]
    braille: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(pattern) = patterns::find(&args.pattern) else {
        let names: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
        bail!(
            "Unknown pattern \"{}\", expected one of: {}",
            args.pattern,
            names.join(", ")
        )
    };

    let mut board = BoardConfig::new(args.width, args.height)
        .with_wrap(args.wrap)
        .with_rule(args.rule)
        .board()
        .context("Failed to create board")?;

    let x = (args.width.saturating_sub(pattern.width()) / 2) as Coord;
    let y = (args.height.saturating_sub(pattern.height()) / 2) as Coord;
    let placed = board.stamp(&pattern, x, y);
    info!(pattern = pattern.name, placed, "Seeded board");

    board
        .advance_by(args.generations)
        .with_context(|| format!("Failed after generation {}", board.generation()))?;

    println!(
        "{}, generation {}, population {}",
        board.rule_string(),
        board.generation(),
        board.population()
    );

    if args.braille {
        print!("{}", Camera::new().render(&board));
    } else {
        print!("{board}");
    }

    Ok(())
}
