use crate::deck::Deck;

/// The two progress signals the board displays: cards completed within the
/// current round, and rounds completed within the outer curriculum. This
/// game contributes exactly one unit to the curriculum when its round
/// finishes, regardless of how often it is replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    pub intra_completed: usize,
    pub intra_total: usize,
    pub rounds_completed: u32,
    pub rounds_total: u32,
}

impl ProgressTracker {
    pub fn new(rounds_total: u32) -> Self {
        Self {
            intra_completed: 0,
            intra_total: 0,
            rounds_completed: 0,
            rounds_total,
        }
    }

    /// Refresh the intra-round counters from the deck cursor.
    pub fn sync_intra(&mut self, deck: &Deck) {
        self.intra_completed = deck.cursor();
        self.intra_total = deck.len();
    }

    /// Cards completed this round, in `[0, 1]`. An empty round reports 1.0:
    /// there is nothing left to do.
    pub fn intra_round_fraction(&self) -> f32 {
        if self.intra_total == 0 {
            1.0
        } else {
            self.intra_completed as f32 / self.intra_total as f32
        }
    }

    /// Curriculum progress, in `[0, 1]`.
    pub fn round_fraction(&self) -> f32 {
        if self.rounds_total == 0 {
            0.0
        } else {
            self.rounds_completed as f32 / self.rounds_total as f32
        }
    }

    /// This round counts as one completed unit of the curriculum.
    /// Idempotent: replaying the round does not accumulate.
    pub fn mark_round_complete(&mut self) {
        self.rounds_completed = 1;
    }

    pub fn round_label(&self) -> String {
        format!("{} / {}", self.rounds_completed, self.rounds_total)
    }
}
