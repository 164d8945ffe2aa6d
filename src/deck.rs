use crate::models::QuizItem;
use rand::Rng;
use rand::seq::SliceRandom;

/// One round's worth of shuffled quiz items plus a forward-only cursor.
/// Rebuilt (and reshuffled) only at round start.
#[derive(Debug)]
pub struct Deck {
    items: Vec<QuizItem>,
    cursor: usize,
}

impl Deck {
    /// Copies the supplied items, shuffles the copy uniformly and resets
    /// the cursor. The caller's list is left untouched.
    pub fn start_round(items: &[QuizItem], rng: &mut impl Rng) -> Self {
        let mut items = items.to_vec();
        items.shuffle(rng);
        Self { items, cursor: 0 }
    }

    /// Item under the cursor, or `None` once the round is complete.
    pub fn current(&self) -> Option<&QuizItem> {
        self.items.get(self.cursor)
    }

    /// Moves the cursor forward by one. Calling this past the end is a
    /// precondition violation; in release builds it is a guarded no-op.
    pub fn advance(&mut self) {
        debug_assert!(self.cursor < self.items.len(), "advance past end of deck");
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.items.len()
    }
}
