//! This crate contains the source code for the binary of the maze solver.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io::{self, Write as _};

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use log::debug;
use mazerunner::{init_logging, load_grid, report, solve, App, Config};

fn main() -> Result<()> {
    install()?;

    let _ = init_logging();

    let config = Config::parse();
    debug!("{config:?}");
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let maze = config.resolve_maze(&mut input, &mut output)?;
    let grid = load_grid(&maze, config.policy())?;

    if !config.view {
        writeln!(output, "\nMaze loaded:\n{grid}\n")?;
    }

    let algorithm = config.resolve_algorithm(&mut input, &mut output)?;

    if config.view {
        let mut terminal = ratatui::init();
        let result = App::new(grid, algorithm).run(&mut terminal);
        ratatui::restore();

        return result;
    }

    writeln!(output, "Solving with {algorithm}...\n")?;
    let outcome = solve(&grid, algorithm);
    writeln!(output, "{}", report(&grid, &outcome, algorithm, config.marker))?;

    Ok(())
}
