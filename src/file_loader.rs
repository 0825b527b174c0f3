//! File loading for maze text files.

use std::{fs, path::Path};

use log::debug;

use crate::maze::{GlyphPolicy, Grid, LoadError};

/// Reads a maze file and validates its contents into a [`Grid`].
///
/// # Errors
///
/// This function returns [`LoadError::SourceNotFound`] if the file cannot be read, and any of the
/// validation errors of [`Grid::from_lines`] if its contents do not form a valid maze.
pub fn load_grid<P>(path: P, policy: GlyphPolicy) -> Result<Grid, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("reading maze from {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    Grid::parse(&contents, policy)
}
