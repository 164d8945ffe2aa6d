pub mod data;
pub mod deck;
pub mod drag;
pub mod geometry;
pub mod logger;
pub mod models;
pub mod progress;
pub mod round;
pub mod screen;
pub mod timer;
pub mod ui;

// Re-exports for convenience
pub use data::{default_deck, get_deck_files, load_deck};
pub use deck::Deck;
pub use drag::{DragController, DropResolution, Outcome};
pub use geometry::{BoardGeometry, Point, Rect, Size};
pub use models::{Category, DropTarget, Highlight, PointerEvent, QuizItem};
pub use progress::ProgressTracker;
pub use round::{Round, RoundSignal};
pub use screen::{Screen, ScreenCoordinator};
pub use timer::{ADVANCE_DELAY, FINISH_DELAY, Scheduler, Transition};
pub use ui::{draw_board, draw_finish, draw_start};
