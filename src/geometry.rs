//! Board geometry: points, rectangles, and the clamp band a dragged card
//! is allowed to move in.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Everything the drag controller needs to know about the space the card
/// moves in. The card may overshoot the top of the board slightly and is
/// kept off the bottom edge of the viewport by a fixed margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub board: Rect,
    pub viewport_height: f32,
    pub card_size: Size,
    pub upward_overshoot: f32,
    pub bottom_margin: f32,
}

impl BoardGeometry {
    pub fn new(board: Rect, viewport_height: f32, card_size: Size) -> Self {
        Self {
            board,
            viewport_height,
            card_size,
            upward_overshoot: 50.0,
            bottom_margin: 40.0,
        }
    }

    /// Centered anchor the card rests at and returns to.
    pub fn card_home(&self) -> Point {
        Point::new(
            self.board.x + (self.board.width - self.card_size.width) / 2.0,
            self.board.y,
        )
    }

    /// Clamp a candidate card origin into the allowed band.
    pub fn clamp_card(&self, p: Point) -> Point {
        let max_x = (self.board.right() - self.card_size.width).max(self.board.x);
        let min_y = self.board.y - self.upward_overshoot;
        let max_y =
            (self.viewport_height - self.card_size.height - self.bottom_margin).max(min_y);
        Point::new(p.x.clamp(self.board.x, max_x), p.y.clamp(min_y, max_y))
    }

    pub fn card_rect(&self, origin: Point) -> Rect {
        Rect::new(
            origin.x,
            origin.y,
            self.card_size.width,
            self.card_size.height,
        )
    }
}
