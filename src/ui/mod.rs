pub mod layout;

mod board;
mod finish;
mod start;

pub use board::draw_board;
pub use finish::draw_finish;
pub use layout::{calculate_board_chunks, card_size, engine_geometry};
pub use start::draw_start;
