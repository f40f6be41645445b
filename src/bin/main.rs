use std::path::PathBuf;

use clap::ArgGroup;
use clap::Parser;
use clap::ValueEnum;

use maze_search::annotate::AnnotatedGrid;
use maze_search::frontier::Strategy;
use maze_search::grid::{Cell, Grid};
use maze_search::heuristic::Heuristic;
use maze_search::search::{SearchOptions, search_with};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("algorithm").required(true)))]
struct Args {
    /// Path to the maze file: rows of 0 (free) / 1 (wall).
    maze_file: PathBuf,

    /// Use breadth-first search.
    #[arg(short = 'b', long, group = "algorithm")]
    bfs: bool,

    /// Use depth-first search.
    #[arg(short = 'd', long, group = "algorithm")]
    dfs: bool,

    /// Use A* search.
    #[arg(short = 'a', long, group = "algorithm")]
    astar: bool,

    /// Heuristic for A*.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Euclidean)]
    heuristic: HeuristicArg,

    /// Start cell as `row,col`. Defaults to the bottom-row opening, then
    /// the bottom-left corner.
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Goal cell as `row,col`. Defaults to the top-row opening, then the
    /// top-right corner.
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,

    /// Abort after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Euclidean,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Euclidean => Heuristic::Euclidean,
        }
    }
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad col: {e}"))?;
    Ok(Cell::new(row, col))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.maze_file)?;
    let grid = Grid::try_from(text.as_str())?;
    let (height, width) = grid.dimensions();

    let strategy = if args.dfs {
        Strategy::DepthFirst
    } else if args.astar {
        Strategy::BestFirst(args.heuristic.into())
    } else {
        Strategy::BreadthFirst
    };

    // Entrance at the bottom, exit at the top, as maze files conventionally
    // have them; corners as the last resort.
    let start = args
        .start
        .or_else(|| grid.opening_in_row(height - 1))
        .unwrap_or(Cell::new(height - 1, 0));
    let goal = args
        .goal
        .or_else(|| grid.opening_in_row(0))
        .unwrap_or(Cell::new(0, width - 1));

    let options = SearchOptions {
        max_expansions: args.max_expansions,
    };
    let report = search_with(&grid, start, goal, strategy, options)?;

    let annotated = AnnotatedGrid::project(&grid, &report.explored, report.path.as_ref());
    print!("{annotated}");

    match report.path {
        Some(path) => println!(
            "{strategy}: {} steps, {} cells expanded",
            path.steps(),
            report.expansions
        ),
        None => println!("No path found"),
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
