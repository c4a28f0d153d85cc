//! Snake board rendering.
//!
//! The board is painted on a ratatui canvas whose coordinates are the pixel
//! arena (600x600 for the standard board). Each cell is filled from its arena
//! rectangle. With the half-block marker one terminal column is one canvas
//! pixel wide and one row is two pixels tall, so a board `k` pixels per cell
//! takes `grid_w * k` columns and `grid_h * k / 2` rows and stays square.

use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use crate::constants::CELL_SIZE_PX;
use crate::snake::{Arena, BoundaryPolicy, Cell, PlayMode, Round};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FULL_BLOCK: char = '\u{2588}'; // █

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_COLOR: Color = Color::Rgb(0, 220, 0);
const FOOD_COLOR: Color = Color::Rgb(255, 40, 40);
const OUTLINE_COLOR: Color = Color::Rgb(0, 0, 0);
const EMPTY_BG: Color = Color::Rgb(30, 30, 30);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Smallest cell (in canvas pixels) that still gets an outline.
const MIN_OUTLINED_CELL: u16 = 4;

/// Render the in-game scene: board, status bar, info panel.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, round: &Round, ticks_per_second: u32) {
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 22);

    render_play_field(frame, layout.content, round);
    render_status_bar_content(frame, layout.status_bar, round);
    render_info_panel(frame, layout.info_panel, round, ticks_per_second);
}

/// Canvas pixels per cell that fit in `area` (inside a 1-cell border).
fn pixels_per_cell(area: Rect, round: &Round) -> u16 {
    let grid = round.rules.grid;
    let fit_w = area.width.saturating_sub(2) / grid.width as u16;
    let fit_h = area.height.saturating_sub(2) * 2 / grid.height as u16;
    fit_w.min(fit_h)
}

/// Render the board centered in `area`.
pub fn render_play_field(frame: &mut Frame, area: Rect, round: &Round) {
    let k = pixels_per_cell(area, round);
    if k == 0 {
        let msg = Paragraph::new("Terminal too small").style(Style::default().fg(Color::Red));
        frame.render_widget(msg, area);
        return;
    }

    let grid = round.rules.grid;
    let arena = Arena::for_grid(grid, CELL_SIZE_PX);
    let board_w = grid.width as u16 * k + 2;
    let board_h = (grid.height as u16 * k).div_ceil(2) + 2;
    let board = Rect::new(
        area.x + area.width.saturating_sub(board_w) / 2,
        area.y + area.height.saturating_sub(board_h) / 2,
        board_w.min(area.width),
        board_h.min(area.height),
    );

    let title = format!(" Score: {} ", round.score);
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .marker(Marker::HalfBlock)
        .background_color(EMPTY_BG)
        .x_bounds([0.0, arena.width_px as f64])
        .y_bounds([0.0, arena.height_px as f64])
        .paint(|ctx| {
            if let Some(food) = round.food {
                fill_cell(ctx, &arena, food.position, k, FOOD_COLOR);
            }
            for (i, cell) in round.snake.body.iter().enumerate() {
                let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
                fill_cell(ctx, &arena, *cell, k, color);
            }
        });
    frame.render_widget(canvas, board);
}

/// Fill one cell with horizontal lines, one per canvas pixel row, then
/// outline it when the cell is large enough for the outline to show.
fn fill_cell(ctx: &mut Context, arena: &Arena, cell: Cell, pixels: u16, color: Color) {
    let rect = arena.cell_rect(cell).flipped(arena.height_px);
    let step = arena.cell_px as f64 / pixels as f64;
    let x1 = rect.x as f64 + step / 2.0;
    let x2 = (rect.x + rect.width) as f64 - step / 2.0;
    for row in 0..pixels {
        let y = rect.y as f64 + (row as f64 + 0.5) * step;
        ctx.draw(&CanvasLine {
            x1,
            y1: y,
            x2,
            y2: y,
            color,
        });
    }
    if pixels >= MIN_OUTLINED_CELL {
        ctx.draw(&Rectangle {
            x: rect.x as f64 + step / 2.0,
            y: rect.y as f64 + step / 2.0,
            width: rect.width as f64 - step,
            height: rect.height as f64 - step,
            color: OUTLINE_COLOR,
        });
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, round: &Round) {
    match round.mode {
        PlayMode::Human => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Move"), ("[Esc]", "Quit")],
        ),
        PlayMode::Ai => render_status_bar(
            frame,
            area,
            "Autopilot engaged",
            Color::Cyan,
            &[("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, round: &Round, ticks_per_second: u32) {
    let inner = render_info_panel_frame(frame, area);

    let edges = match round.rules.policy {
        BoundaryPolicy::Bounded => "Walls",
        BoundaryPolicy::Wrapped => "Wrap",
    };
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Mode: ", label),
            Span::styled(round.mode.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                round.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(round.snake.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Grid: ", label),
            Span::styled(
                format!("{}x{}", round.rules.grid.width, round.rules.grid.height),
                value,
            ),
        ]),
        Line::from(vec![Span::styled("Edges: ", label), Span::styled(edges, value)]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{} ticks/s", ticks_per_second), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend_line(HEAD_COLOR, "Head"),
        legend_line(BODY_COLOR, "Body"),
        legend_line(FOOD_COLOR, "Food"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(color: Color, name: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(color)),
        Span::styled(name, Style::default().fg(Color::DarkGray)),
    ])
}
