use crate::geometry::{self, BoardGeometry, Size};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Named areas of the playing screen.
pub struct BoardLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub board_area: Rect,
    pub shelf_areas: Vec<Rect>,
    pub explanation_area: Rect,
    pub curriculum_area: Rect,
}

pub fn calculate_board_chunks(area: Rect, shelf_count: usize) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    let shelf_constraints =
        vec![Constraint::Ratio(1, shelf_count.max(1) as u32); shelf_count.max(1)];
    let shelf_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(shelf_constraints)
        .split(chunks[3])
        .to_vec();

    BoardLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        board_area: chunks[2],
        shelf_areas,
        explanation_area: chunks[4],
        curriculum_area: chunks[5],
    }
}

/// Card widget size in cells for a given label: the text plus borders and
/// one cell of padding each side.
pub fn card_size(text: &str) -> Size {
    let width = (UnicodeWidthStr::width(text) as f32 + 4.0).max(8.0);
    Size::new(width, 3.0)
}

/// Translate the cell layout into the engine's coordinate space: the clamp
/// band for the dragged card and the shelf bounds for hit-testing.
pub fn engine_geometry(
    layout: &BoardLayout,
    frame: Rect,
    card_text: &str,
) -> (BoardGeometry, Vec<geometry::Rect>) {
    let board = geometry::Rect::new(
        layout.board_area.x as f32,
        layout.board_area.y as f32,
        layout.board_area.width as f32,
        layout.board_area.height as f32,
    );
    let mut board_geometry =
        BoardGeometry::new(board, (frame.y + frame.height) as f32, card_size(card_text));
    // Terminal cells are coarse: one row of overshoot, two rows of margin.
    board_geometry.upward_overshoot = 1.0;
    board_geometry.bottom_margin = 2.0;

    let shelf_bounds = layout
        .shelf_areas
        .iter()
        .map(|r| {
            geometry::Rect::new(
                r.x as f32,
                r.y as f32,
                r.width.saturating_sub(1) as f32,
                r.height.saturating_sub(1) as f32,
            )
        })
        .collect();

    (board_geometry, shelf_bounds)
}
