//! Command line configuration and interactive prompting.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre::{bail, Result};

use crate::{maze::GlyphPolicy, pathfinding::Algorithm, render::DEFAULT_PATH_MARKER};

/// Prompt shown when no maze path is given on the command line.
pub(crate) const MAZE_PROMPT: &str = "Enter maze file name (e.g., maze1.txt): ";

/// Prompt shown when no algorithm is given on the command line.
pub(crate) const ALGORITHM_PROMPT: &str =
    "Choose solver 1 or 2: 1 = DFS (Stack), 2 = BFS (Queue): ";

/// Solve a text maze with depth-first or breadth-first search.
///
/// Any option left out on the command line is asked for on standard input.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Path to the maze file.
    pub maze: Option<PathBuf>,
    /// Search algorithm; `1` and `2` are accepted as aliases for DFS and BFS.
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,
    /// Glyph used to mark the path in the printed maze.
    #[arg(short, long, default_value_t = DEFAULT_PATH_MARKER)]
    pub marker: char,
    /// Treat unrecognized glyphs as walls instead of rejecting the maze.
    #[arg(long)]
    pub lenient: bool,
    /// Replay the search in an interactive terminal viewer.
    #[arg(long)]
    pub view: bool,
}

impl Config {
    /// Glyph policy selected by the `--lenient` flag.
    #[must_use]
    pub const fn policy(&self) -> GlyphPolicy {
        if self.lenient {
            GlyphPolicy::Lenient
        } else {
            GlyphPolicy::Strict
        }
    }

    /// Returns the maze path, prompting for it when it was not given.
    ///
    /// # Errors
    ///
    /// This function returns an error if the prompt cannot be written or the answer read, or if
    /// the input ends before a file name is given.
    pub fn resolve_maze<R, W>(&self, input: &mut R, output: &mut W) -> Result<PathBuf>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(maze) = &self.maze {
            return Ok(maze.clone());
        }

        Ok(PathBuf::from(prompt(input, output, MAZE_PROMPT)?))
    }

    /// Returns the search algorithm, prompting for it when it was not given.
    ///
    /// # Errors
    ///
    /// This function returns an error if prompting fails, or a
    /// [`SelectorError`](crate::SelectorError) if the answer names no known algorithm.
    pub fn resolve_algorithm<R, W>(&self, input: &mut R, output: &mut W) -> Result<Algorithm>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(algorithm) = self.algorithm {
            return Ok(algorithm);
        }

        Ok(prompt(input, output, ALGORITHM_PROMPT)?.parse()?)
    }
}

/// Writes a prompt and reads one trimmed line of input.
fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        bail!("input ended before an answer was given");
    }

    Ok(answer.trim().to_owned())
}
