/// Top-level presentation state. Start shows the intro overlay, Playing the
/// board, Finished the congratulation overlay. No reverse transitions:
/// replay means relaunching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    Finished,
}

#[derive(Debug)]
pub struct ScreenCoordinator {
    state: Screen,
}

impl ScreenCoordinator {
    pub fn new() -> Self {
        Self {
            state: Screen::Start,
        }
    }

    pub fn state(&self) -> Screen {
        self.state
    }

    /// User pressed start. Only valid from the start screen.
    pub fn begin(&mut self) {
        if self.state == Screen::Start {
            self.state = Screen::Playing;
        }
    }

    /// Round controller reported completion. Only valid while playing.
    pub fn finish(&mut self) {
        if self.state == Screen::Playing {
            self.state = Screen::Finished;
        }
    }
}

impl Default for ScreenCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
