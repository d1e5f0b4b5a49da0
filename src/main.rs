use anyhow::{Context, Result};
use basiks::{grid_of, Grid, GridLike, MutableGrid};
use clap::Parser;
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Builds an integer grid, optionally fills it, trims its borders and prints it.
#[derive(Parser, Debug)]
#[command(name = "basiks", version)]
struct Args {
    /// Grid width
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Grid height
    #[arg(long, default_value_t = 2)]
    height: usize,

    /// Comma separated cells in row-major order (default: x + 1 + y * width)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,

    /// Overwrite every cell with this value
    #[arg(long, allow_hyphen_values = true)]
    fill: Option<i64>,

    #[arg(long)]
    drop_left: Option<usize>,

    #[arg(long)]
    drop_right: Option<usize>,

    #[arg(long)]
    drop_top: Option<usize>,

    #[arg(long)]
    drop_bottom: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let grid = run(&args)?;
    print!("{}", render(&grid));
    Ok(())
}

fn run(args: &Args) -> Result<Grid<i64>> {
    trace!("Running with args: {:?}", args);
    let width = args.width;
    let mut grid = match &args.values {
        Some(values) => grid_of(args.width, args.height, values.iter().copied())
            .context("Failed to build grid from --values")?
            .into_mutable(),
        None => MutableGrid::from_fn(args.width, args.height, |x, y| (x + 1 + y * width) as i64),
    };
    if let Some(value) = args.fill {
        grid.fill(value);
    }

    let mut grid = grid.into_immutable();
    if let Some(count) = args.drop_left {
        grid = grid.drop_left(count).context("Failed to drop left columns")?;
    }
    if let Some(count) = args.drop_right {
        grid = grid.drop_right(count).context("Failed to drop right columns")?;
    }
    if let Some(count) = args.drop_top {
        grid = grid.drop_top(count).context("Failed to drop top rows")?;
    }
    if let Some(count) = args.drop_bottom {
        grid = grid.drop_bottom(count).context("Failed to drop bottom rows")?;
    }
    info!("Resulting grid is {}x{}", grid.width(), grid.height());
    Ok(grid)
}

/// One line per row, cells separated by spaces.
fn render(grid: &Grid<i64>) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(i64::to_string).collect();
            cells.join(" ") + "\n"
        })
        .collect()
}
