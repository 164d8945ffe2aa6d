//! Round orchestration: pulls cards off the shuffled deck one at a time,
//! feeds pointer events to the active card's drag controller, interprets
//! the drop outcome, and schedules the delayed advance / finish
//! transitions.

use crate::deck::Deck;
use crate::drag::{DragController, DropResolution, Outcome};
use crate::geometry::BoardGeometry;
use crate::logger;
use crate::models::{Category, DropTarget, Highlight, PointerEvent, QuizItem};
use crate::progress::ProgressTracker;
use crate::timer::{ADVANCE_DELAY, FINISH_DELAY, Scheduler, Transition};
use std::time::Instant;

pub const INCORRECT_PREFIX: &str = "Неправильно. ";
pub const ROUND_COMPLETE_MESSAGE: &str = "Ви виконали всі завдання!";

/// The card currently on the board: a snapshot of its quiz item plus its
/// drag state machine.
#[derive(Debug)]
pub struct ActiveCard {
    pub item: QuizItem,
    pub drag: DragController,
}

/// Emitted from `tick` when the post-completion delay has elapsed and the
/// screen coordinator should take over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSignal {
    Finished,
}

#[derive(Debug)]
pub struct Round {
    deck: Deck,
    pub targets: Vec<DropTarget>,
    pub card: Option<ActiveCard>,
    pub progress: ProgressTracker,
    pub explanation: Option<String>,
    geometry: BoardGeometry,
    scheduler: Scheduler,
}

impl Round {
    pub fn new(
        items: &[QuizItem],
        targets: Vec<DropTarget>,
        rounds_total: u32,
        geometry: BoardGeometry,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let deck = Deck::start_round(items, rng);
        let mut progress = ProgressTracker::new(rounds_total);
        progress.sync_intra(&deck);
        Self {
            deck,
            targets,
            card: None,
            progress,
            explanation: None,
            geometry,
            scheduler: Scheduler::new(),
        }
    }

    /// The two shelves of the «пів» game.
    pub fn default_targets() -> Vec<DropTarget> {
        vec![
            DropTarget::new("half-shelf", "«пів» окремо", Category::Half),
            DropTarget::new("whole-shelf", "одне слово", Category::Whole),
        ]
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Clears the previous card's outcome markers and either spawns the
    /// next card or, when the deck is exhausted, latches round completion
    /// and schedules the finish transition.
    pub fn show_next_card(&mut self, now: Instant) {
        self.explanation = None;
        for target in &mut self.targets {
            target.highlight = Highlight::None;
        }
        self.progress.sync_intra(&self.deck);

        match self.deck.current() {
            Some(item) => {
                logger::log(&format!(
                    "showing card {} of {}",
                    self.deck.cursor() + 1,
                    self.deck.len()
                ));
                self.card = Some(ActiveCard {
                    item: item.clone(),
                    drag: DragController::new(self.geometry),
                });
            }
            None => {
                logger::log("round complete");
                self.card = None;
                self.progress.mark_round_complete();
                self.explanation = Some(ROUND_COMPLETE_MESSAGE.to_string());
                self.scheduler.schedule(now + FINISH_DELAY, Transition::Finish);
            }
        }
    }

    /// Forwards a pointer event to the active card. A resolved drop marks
    /// the shelf, surfaces the explanation, advances the deck and schedules
    /// the next card. The locked card plus the single scheduler slot keep
    /// this to exactly one advance per card.
    pub fn pointer_event(&mut self, event: PointerEvent, now: Instant) {
        let Some(card) = &mut self.card else {
            return;
        };
        let resolution = card.drag.handle(event, &mut self.targets, card.item.category);
        match resolution {
            Some(DropResolution::Resolved { target, outcome }) => {
                self.targets[target].highlight = match outcome {
                    Outcome::Correct => Highlight::Correct,
                    Outcome::Incorrect => Highlight::Incorrect,
                };
                self.explanation = Some(match outcome {
                    Outcome::Correct => card.item.explanation.clone(),
                    Outcome::Incorrect => {
                        format!("{}{}", INCORRECT_PREFIX, card.item.explanation)
                    }
                });
                logger::log(&format!(
                    "card \"{}\" dropped on {}: {:?}",
                    card.item.text, self.targets[target].id, outcome
                ));
                self.deck.advance();
                self.progress.sync_intra(&self.deck);
                self.scheduler
                    .schedule(now + ADVANCE_DELAY, Transition::NextCard);
            }
            Some(DropResolution::Returned) | None => {}
        }
    }

    /// Drives the delayed transitions. Card N+1 only ever appears from
    /// here, after card N's delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<RoundSignal> {
        match self.scheduler.poll(now)? {
            Transition::NextCard => {
                self.show_next_card(now);
                None
            }
            Transition::Finish => Some(RoundSignal::Finished),
        }
    }

    /// Re-binds target bounds and board geometry after a terminal resize.
    pub fn set_geometry(&mut self, geometry: BoardGeometry, target_bounds: &[crate::geometry::Rect]) {
        self.geometry = geometry;
        for (target, bounds) in self.targets.iter_mut().zip(target_bounds) {
            target.bounds = *bounds;
        }
        if let Some(card) = &mut self.card {
            card.drag.set_geometry(geometry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn geometry() -> BoardGeometry {
        let mut g = BoardGeometry::new(
            Rect::new(0.0, 0.0, 100.0, 90.0),
            100.0,
            Size::new(10.0, 4.0),
        );
        g.upward_overshoot = 5.0;
        g.bottom_margin = 2.0;
        g
    }

    fn targets() -> Vec<DropTarget> {
        let mut targets = Round::default_targets();
        targets[0].bounds = Rect::new(0.0, 70.0, 45.0, 15.0);
        targets[1].bounds = Rect::new(55.0, 70.0, 45.0, 15.0);
        targets
    }

    fn items() -> Vec<QuizItem> {
        vec![
            QuizItem {
                text: "пів Києва".to_string(),
                category: Category::Half,
                explanation: "половина Києва, пишемо окремо".to_string(),
            },
            QuizItem {
                text: "півострів".to_string(),
                category: Category::Whole,
                explanation: "цілісне поняття, пишемо разом".to_string(),
            },
        ]
    }

    fn round_of(items: &[QuizItem]) -> Round {
        let mut rng = StdRng::seed_from_u64(11);
        Round::new(items, targets(), 9, geometry(), &mut rng)
    }

    const HALF_SHELF: Point = Point { x: 20.0, y: 75.0 };
    const WHOLE_SHELF: Point = Point { x: 60.0, y: 75.0 };
    const OPEN_SPACE: Point = Point { x: 50.0, y: 40.0 };

    /// Grab the active card at its anchor and release at `drop_at`.
    fn drag_to(round: &mut Round, drop_at: Point, now: Instant) {
        let home = geometry().card_home();
        let grip = Point::new(home.x + 1.0, home.y + 1.0);
        round.pointer_event(PointerEvent::Down(grip), now);
        round.pointer_event(PointerEvent::Move(drop_at), now);
        round.pointer_event(PointerEvent::Up(drop_at), now);
    }

    #[test]
    fn test_drop_on_half_shelf_scores_by_card_category() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        let mut outcomes = Vec::new();
        for step in 0..2 {
            let category = round.card.as_ref().unwrap().item.category;
            drag_to(&mut round, HALF_SHELF, now);
            let outcome = round.card.as_ref().unwrap().drag.outcome().unwrap();
            outcomes.push(outcome);
            assert_eq!(
                outcome,
                if category == Category::Half {
                    Outcome::Correct
                } else {
                    Outcome::Incorrect
                }
            );
            assert_eq!(round.deck().cursor(), step + 1);
            round.tick(now + ADVANCE_DELAY);
        }
        // One item of each category, both dropped on the half shelf.
        assert!(outcomes.contains(&Outcome::Correct));
        assert!(outcomes.contains(&Outcome::Incorrect));

        // Deck exhausted: completion latched, finish scheduled.
        assert!(round.card.is_none());
        assert_eq!(round.explanation.as_deref(), Some(ROUND_COMPLETE_MESSAGE));
        assert_eq!(round.progress.round_fraction(), 1.0 / 9.0);
        assert_eq!(round.progress.intra_round_fraction(), 1.0);
    }

    #[test]
    fn test_incorrect_drop_prefixes_the_explanation() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        let card = round.card.as_ref().unwrap();
        let wrong_shelf = if card.item.category == Category::Half {
            WHOLE_SHELF
        } else {
            HALF_SHELF
        };
        let explanation = card.item.explanation.clone();
        drag_to(&mut round, wrong_shelf, now);
        assert_eq!(
            round.explanation.as_deref(),
            Some(format!("{INCORRECT_PREFIX}{explanation}").as_str())
        );
    }

    #[test]
    fn test_correct_drop_surfaces_plain_explanation() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        let card = round.card.as_ref().unwrap();
        let right_shelf = if card.item.category == Category::Half {
            HALF_SHELF
        } else {
            WHOLE_SHELF
        };
        let explanation = card.item.explanation.clone();
        drag_to(&mut round, right_shelf, now);
        assert_eq!(round.explanation.as_deref(), Some(explanation.as_str()));
    }

    #[test]
    fn test_release_outside_shelves_does_not_advance() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        drag_to(&mut round, OPEN_SPACE, now);
        assert_eq!(round.deck().cursor(), 0);
        assert!(round.explanation.is_none());
        let card = round.card.as_ref().unwrap();
        assert!(!card.drag.is_locked());
        assert_eq!(card.drag.position(), geometry().card_home());

        // Still draggable: resolve it now.
        drag_to(&mut round, HALF_SHELF, now);
        assert_eq!(round.deck().cursor(), 1);
    }

    #[test]
    fn test_next_card_waits_for_the_advance_delay() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        drag_to(&mut round, HALF_SHELF, now);
        assert!(round.card.as_ref().unwrap().drag.is_locked());

        assert_eq!(round.tick(now), None);
        assert_eq!(round.tick(now + Duration::from_millis(1499)), None);
        assert!(round.card.as_ref().unwrap().drag.is_locked());

        assert_eq!(round.tick(now + ADVANCE_DELAY), None);
        let card = round.card.as_ref().unwrap();
        assert!(!card.drag.is_locked());
        assert_eq!(round.explanation, None);
        assert!(
            round
                .targets
                .iter()
                .all(|t| t.highlight == Highlight::None)
        );
    }

    #[test]
    fn test_duplicate_resolution_events_do_not_double_advance() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        drag_to(&mut round, HALF_SHELF, now);
        assert_eq!(round.deck().cursor(), 1);

        // Locked card: repeat pointer traffic is ignored.
        drag_to(&mut round, WHOLE_SHELF, now);
        drag_to(&mut round, HALF_SHELF, now);
        assert_eq!(round.deck().cursor(), 1);

        round.tick(now + ADVANCE_DELAY);
        assert_eq!(round.deck().cursor(), 1);
        assert!(round.card.is_some());
    }

    #[test]
    fn test_finish_signal_fires_after_its_delay() {
        let now = Instant::now();
        let mut round = round_of(&items()[..1]);
        round.show_next_card(now);

        let card_category = round.card.as_ref().unwrap().item.category;
        let shelf = if card_category == Category::Half {
            HALF_SHELF
        } else {
            WHOLE_SHELF
        };
        drag_to(&mut round, shelf, now);
        round.tick(now + ADVANCE_DELAY);
        assert!(round.card.is_none());

        let completed_at = now + ADVANCE_DELAY;
        assert_eq!(round.tick(completed_at + Duration::from_millis(1999)), None);
        assert_eq!(
            round.tick(completed_at + FINISH_DELAY),
            Some(RoundSignal::Finished)
        );
        // Signal fires once; the fraction is latched.
        assert_eq!(round.tick(completed_at + FINISH_DELAY), None);
        assert_eq!(round.progress.round_fraction(), 1.0 / 9.0);
    }

    #[test]
    fn test_empty_deck_goes_straight_to_completion() {
        let now = Instant::now();
        let mut round = round_of(&[]);
        assert_eq!(round.progress.intra_round_fraction(), 1.0);

        round.show_next_card(now);
        assert!(round.card.is_none());
        assert_eq!(round.explanation.as_deref(), Some(ROUND_COMPLETE_MESSAGE));
        assert_eq!(
            round.tick(now + FINISH_DELAY),
            Some(RoundSignal::Finished)
        );
    }

    #[test]
    fn test_pointer_events_between_cards_are_ignored() {
        let now = Instant::now();
        let mut round = round_of(&items()[..1]);
        round.show_next_card(now);
        let shelf = if round.card.as_ref().unwrap().item.category == Category::Half {
            HALF_SHELF
        } else {
            WHOLE_SHELF
        };
        drag_to(&mut round, shelf, now);
        round.tick(now + ADVANCE_DELAY);

        // No card on the board; pointer traffic must not panic or schedule.
        drag_to(&mut round, HALF_SHELF, now + ADVANCE_DELAY);
        assert_eq!(round.deck().cursor(), 1);
    }

    #[test]
    fn test_outcome_markers_cleared_on_next_card() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);
        drag_to(&mut round, WHOLE_SHELF, now);
        assert!(
            round
                .targets
                .iter()
                .any(|t| t.highlight == Highlight::Correct || t.highlight == Highlight::Incorrect)
        );
        round.tick(now + ADVANCE_DELAY);
        assert!(
            round
                .targets
                .iter()
                .all(|t| t.highlight == Highlight::None)
        );
    }

    #[test]
    fn test_resize_rebinds_target_bounds() {
        let now = Instant::now();
        let mut round = round_of(&items());
        round.show_next_card(now);

        let new_bounds = [
            Rect::new(0.0, 40.0, 20.0, 8.0),
            Rect::new(30.0, 40.0, 20.0, 8.0),
        ];
        round.set_geometry(geometry(), &new_bounds);
        assert_eq!(round.targets[0].bounds, new_bounds[0]);
        assert_eq!(round.targets[1].bounds, new_bounds[1]);
    }
}
