use crate::geometry::{Point, Rect};
use serde::Deserialize;

/// Classification a card and a shelf are matched against. Two values in
/// this game, but nothing downstream assumes the set is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Half,
    Whole,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizItem {
    pub text: String,
    pub category: Category,
    pub explanation: String,
}

/// Transient visual state of a drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Hovered,
    Correct,
    Incorrect,
}

/// A shelf the card can be dropped on. Bound to one category for the whole
/// session; only the highlight and (on resize) the bounds mutate.
#[derive(Debug, Clone)]
pub struct DropTarget {
    pub id: &'static str,
    pub label: String,
    pub category: Category,
    pub bounds: Rect,
    pub highlight: Highlight,
}

impl DropTarget {
    pub fn new(id: &'static str, label: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            label: label.into(),
            category,
            bounds: Rect::ZERO,
            highlight: Highlight::None,
        }
    }
}

/// Platform-neutral pointer event fed into the interaction core. The main
/// loop maps crossterm mouse events onto these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}
