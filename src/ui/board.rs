use crate::drag::Outcome;
use crate::models::Highlight;
use crate::round::Round;
use crate::ui::layout::BoardLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

pub fn draw_board(f: &mut Frame, round: &Round, layout: &BoardLayout) {
    let header = Paragraph::new(format!(
        "Полиці з «пів» — картка {} / {}",
        (round.deck().cursor() + 1).min(round.deck().len()),
        round.deck().len()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let intra = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(round.progress.intra_round_fraction().clamp(0.0, 1.0) as f64);
    f.render_widget(intra, layout.progress_area);

    for (target, area) in round.targets.iter().zip(layout.shelf_areas.iter()) {
        let color = match target.highlight {
            Highlight::None => Color::DarkGray,
            Highlight::Hovered => Color::Yellow,
            Highlight::Correct => Color::Green,
            Highlight::Incorrect => Color::Red,
        };
        let shelf = Paragraph::new(target.label.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(shelf, *area);
    }

    if let Some(card) = &round.card {
        let position = card.drag.position();
        let card_area = Rect::new(
            position.x.round().max(0.0) as u16,
            position.y.round().max(0.0) as u16,
            (crate::ui::layout::card_size(&card.item.text).width) as u16,
            3,
        )
        .intersection(f.area());
        let color = match card.drag.outcome() {
            Some(Outcome::Correct) => Color::Green,
            Some(Outcome::Incorrect) => Color::Red,
            None if card.drag.is_dragging() => Color::Yellow,
            None => Color::White,
        };
        let widget = Paragraph::new(card.item.text.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(widget, card_area);
    }

    if let Some(explanation) = &round.explanation {
        let widget = Paragraph::new(explanation.as_str())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Пояснення"));
        f.render_widget(widget, layout.explanation_area);
    }

    let curriculum = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .label(round.progress.round_label())
        .ratio(round.progress.round_fraction().clamp(0.0, 1.0) as f64)
        .block(Block::default().borders(Borders::ALL).title("Загальний поступ"));
    f.render_widget(curriculum, layout.curriculum_area);
}
