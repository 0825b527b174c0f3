//! User interface rendering for the maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Context, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    pathfinding::{self, Algorithm},
    types::CellKind,
    App,
};

/// Key bindings shown in the tooltip.
const KEY_HINTS: &str = "(q) quit / (r) replay / (d) dfs / (b) bfs / (tab) toggle";

/// Renders the viewer: the maze, the replayed search and a status tooltip.
///
/// Each layer is its own canvas over the same area: walls in green, explored cells in yellow, the
/// traced path in red, and the start and end cells in white on top.
///
/// # Errors
///
/// This function returns an error if the maze does not fit the canvas coordinate range or a
/// layout area cannot be retrieved.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze_rows = u16::try_from(app.grid.rows())?;
    let maze_columns = u16::try_from(app.grid.cols())?;

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(4), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let space = centered(maze_content_area, maze_columns, maze_rows)?;

    let walls: Vec<_> = app.grid.cells_of(CellKind::Wall).collect();
    let endpoints = [app.grid.start(), app.grid.end()];
    let wall_coords = pathfinding::transform_maze_to_screen_coords(&walls, &app.grid)?;
    let endpoint_coords = pathfinding::transform_maze_to_screen_coords(&endpoints, &app.grid)?;
    let explored_coords = pathfinding::transform_maze_to_screen_coords(
        &app.animation_manager.explored_cells(),
        &app.grid,
    )?;
    let traced_coords = pathfinding::transform_maze_to_screen_coords(
        &app.animation_manager.traced_cells(),
        &app.grid,
    )?;

    for (coords, color) in [
        (&wall_coords, Color::Green),
        (&explored_coords, Color::Yellow),
        (&traced_coords, Color::Red),
        (&endpoint_coords, Color::White),
    ] {
        frame.render_widget(layer(space, coords, color), space);
    }

    render_tooltip(app, frame, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Returns a `width` by `height` area centered within `area`.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(height),
        Constraint::Min(1),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze row from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(width),
        Constraint::Min(1),
    ])
    .split(row)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")
}

/// Builds one transparent canvas layer drawing `coords` in `color` over `space`.
fn layer<'a>(
    space: Rect,
    coords: &'a [(f64, f64)],
    color: Color,
) -> Canvas<'a, impl Fn(&mut Context<'_>) + 'a> {
    Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(move |ctx| {
            ctx.draw(&Points { coords, color });
        })
}

/// Renders the status line and key hints at the bottom of the screen.
fn render_tooltip(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(KEY_HINTS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(Line::raw(status(app)).centered(), inner);
}

/// Summary of the replayed search.
fn status(app: &App) -> String {
    let name = match app.algorithm {
        Algorithm::Dfs => "DFS (Stack)",
        Algorithm::Bfs => "BFS (Queue)",
    };
    let result = if app.outcome.is_solved() {
        "path found"
    } else {
        "no solution"
    };
    let progress = if app.animation_manager.is_finished() {
        "done"
    } else {
        "replaying"
    };

    format!(
        "{name}: {result}, steps {}, cells explored {} ({progress})",
        app.outcome.steps(),
        app.outcome.explored
    )
}
