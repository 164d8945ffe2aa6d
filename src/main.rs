use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use shelf_quiz::{
    BoardGeometry, Point, PointerEvent, QuizItem, Rect, Round, RoundSignal, Screen,
    ScreenCoordinator, data, logger,
    ui::{calculate_board_chunks, card_size, draw_board, draw_finish, draw_start, engine_geometry},
};
use std::io;
use std::time::{Duration, Instant};

/// This game is one unit of the nine-unit curriculum.
const CURRICULUM_ROUNDS: u32 = 9;

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let items = load_items();
    let mut screens = ScreenCoordinator::new();
    let mut round: Option<Round> = None;

    loop {
        terminal.draw(|f| match screens.state() {
            Screen::Start => draw_start(f),
            Screen::Playing => {
                if let Some(round) = &mut round {
                    let layout = calculate_board_chunks(f.area(), round.targets.len());
                    let card_text = round
                        .card
                        .as_ref()
                        .map(|c| c.item.text.clone())
                        .unwrap_or_default();
                    let (geometry, shelf_bounds) = engine_geometry(&layout, f.area(), &card_text);
                    round.set_geometry(geometry, &shelf_bounds);
                    draw_board(f, round, &layout);
                }
            }
            Screen::Finished => {
                if let Some(round) = &round {
                    draw_finish(f, round);
                }
            }
        })?;

        // Short poll timeout so scheduled transitions fire without input.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => match screens.state() {
                    Screen::Start => match key.code {
                        KeyCode::Enter => {
                            round = Some(new_round(&items));
                            screens.begin();
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    },
                    Screen::Playing | Screen::Finished => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    },
                },
                Event::Mouse(mouse) => {
                    let position = Point::new(mouse.column as f32, mouse.row as f32);
                    match screens.state() {
                        Screen::Start => {
                            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                                round = Some(new_round(&items));
                                screens.begin();
                            }
                        }
                        Screen::Playing => {
                            if let Some(round) = &mut round {
                                let pointer = match mouse.kind {
                                    MouseEventKind::Down(MouseButton::Left) => {
                                        Some(PointerEvent::Down(position))
                                    }
                                    MouseEventKind::Drag(MouseButton::Left)
                                    | MouseEventKind::Moved => Some(PointerEvent::Move(position)),
                                    MouseEventKind::Up(MouseButton::Left) => {
                                        Some(PointerEvent::Up(position))
                                    }
                                    _ => None,
                                };
                                if let Some(pointer) = pointer {
                                    round.pointer_event(pointer, Instant::now());
                                }
                            }
                        }
                        Screen::Finished => {}
                    }
                }
                _ => {}
            }
        }

        if screens.state() == Screen::Playing
            && let Some(round) = &mut round
            && round.tick(Instant::now()) == Some(RoundSignal::Finished)
        {
            screens.finish();
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// First deck file under `decks/` if one loads, otherwise the built-in
/// deck.
fn load_items() -> Vec<QuizItem> {
    for path in data::get_deck_files() {
        match data::load_deck(&path) {
            Ok(items) if !items.is_empty() => {
                logger::log(&format!("loaded deck {}", path.display()));
                return items;
            }
            Ok(_) => logger::log(&format!("deck {} is empty, skipping", path.display())),
            Err(e) => logger::log(&format!("failed to load {}: {}", path.display(), e)),
        }
    }
    data::default_deck()
}

fn new_round(items: &[QuizItem]) -> Round {
    // Geometry is placeholder until the first frame binds the real layout.
    let geometry = BoardGeometry::new(Rect::ZERO, 0.0, card_size(""));
    let mut round = Round::new(
        items,
        Round::default_targets(),
        CURRICULUM_ROUNDS,
        geometry,
        &mut rand::thread_rng(),
    );
    round.show_next_card(Instant::now());
    round
}
