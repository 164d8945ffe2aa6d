//! Per-card drag state machine: pointer-down picks the card up, moves
//! follow the pointer inside the board's clamp band and highlight the shelf
//! under the pointer, pointer-up either resolves the drop against a shelf
//! or returns the card to its anchor. A resolved card is locked and ignores
//! all further pointer input.

use crate::geometry::{BoardGeometry, Point};
use crate::models::{Category, DropTarget, Highlight, PointerEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// What a pointer-up produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResolution {
    /// Dropped on the target at this index.
    Resolved { target: usize, outcome: Outcome },
    /// Released outside every target; the card snapped back and is
    /// draggable again.
    Returned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { offset: Point },
    Resolved(Outcome),
}

#[derive(Debug)]
pub struct DragController {
    geometry: BoardGeometry,
    position: Point,
    state: DragState,
}

impl DragController {
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            position: geometry.card_home(),
            state: DragState::Idle,
        }
    }

    /// Current card origin, live during a drag.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// A resolved card never re-enters dragging.
    pub fn is_locked(&self) -> bool {
        matches!(self.state, DragState::Resolved(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            DragState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Re-binds the board geometry after a resize. An idle card snaps to
    /// the new anchor; a dragged card is re-clamped.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
        match self.state {
            DragState::Idle => self.position = geometry.card_home(),
            DragState::Dragging { .. } | DragState::Resolved(_) => {
                self.position = geometry.clamp_card(self.position);
            }
        }
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        targets: &mut [DropTarget],
        category: Category,
    ) -> Option<DropResolution> {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down(p);
                None
            }
            PointerEvent::Move(p) => {
                self.pointer_move(p, targets);
                None
            }
            PointerEvent::Up(p) => self.pointer_up(p, targets, category),
        }
    }

    /// Starts a session when the point hits the card. Down while already
    /// dragging, or on a locked card, is ignored.
    fn pointer_down(&mut self, p: Point) {
        if self.state != DragState::Idle {
            return;
        }
        if self.geometry.card_rect(self.position).contains(p) {
            self.state = DragState::Dragging {
                offset: Point::new(p.x - self.position.x, p.y - self.position.y),
            };
        }
    }

    fn pointer_move(&mut self, p: Point, targets: &mut [DropTarget]) {
        let DragState::Dragging { offset } = self.state else {
            return;
        };
        self.position = self
            .geometry
            .clamp_card(Point::new(p.x - offset.x, p.y - offset.y));

        // At most one shelf is hovered: first containment match wins.
        let hovered = targets.iter().position(|t| t.bounds.contains(p));
        for (i, target) in targets.iter_mut().enumerate() {
            target.highlight = if hovered == Some(i) {
                Highlight::Hovered
            } else {
                Highlight::None
            };
        }
    }

    /// Spurious up (no session) is a no-op and returns `None`.
    fn pointer_up(
        &mut self,
        p: Point,
        targets: &mut [DropTarget],
        category: Category,
    ) -> Option<DropResolution> {
        if !self.is_dragging() {
            return None;
        }
        for target in targets.iter_mut() {
            if target.highlight == Highlight::Hovered {
                target.highlight = Highlight::None;
            }
        }
        match targets.iter().position(|t| t.bounds.contains(p)) {
            Some(index) => {
                let outcome = if targets[index].category == category {
                    Outcome::Correct
                } else {
                    Outcome::Incorrect
                };
                self.state = DragState::Resolved(outcome);
                Some(DropResolution::Resolved {
                    target: index,
                    outcome,
                })
            }
            None => {
                self.position = self.geometry.card_home();
                self.state = DragState::Idle;
                Some(DropResolution::Returned)
            }
        }
    }
}
