use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    symbols::{self, border},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{player::state::PlayLabel, util::colors};

pub struct PlayerControlsWidget<'a> {
    label: PlayLabel,
    server: &'a str,
}

impl<'a> PlayerControlsWidget<'a> {
    pub fn new(label: PlayLabel, server: &'a str) -> Self {
        Self { label, server }
    }
}

impl Widget for PlayerControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7), Constraint::Min(1)])
            .split(area);

        let button_block = Block::default()
            .borders(Borders::LEFT | Borders::BOTTOM)
            .border_set(border::Set {
                bottom_left: symbols::line::ROUNDED.bottom_left,
                ..symbols::border::ROUNDED
            });
        Paragraph::new(Line::from(self.label.glyph().fg(colors::PRIMARY).bold()))
            .block(button_block)
            .centered()
            .render(layout[0], buf);

        let mut hints = Line::default();
        hints.push_span("space".fg(colors::ACCENT));
        hints.push_span(" toggle  ".fg(colors::NEUTRAL));
        hints.push_span("r".fg(colors::ACCENT));
        hints.push_span(" refresh  ".fg(colors::NEUTRAL));
        hints.push_span("q".fg(colors::ACCENT));
        hints.push_span(" quit".fg(colors::NEUTRAL));

        let info_block = Block::default()
            .borders(Borders::RIGHT | Borders::BOTTOM)
            .border_set(border::Set {
                bottom_right: symbols::line::ROUNDED.bottom_right,
                ..symbols::border::ROUNDED
            })
            .title_bottom(self.server.fg(colors::NEUTRAL));
        Paragraph::new(hints)
            .block(info_block)
            .right_aligned()
            .render(layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn render(label: PlayLabel) -> String {
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        PlayerControlsWidget::new(label, "http://player").render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn renders_the_label_glyph() {
        assert!(render(PlayLabel::Play).contains("▶"));
        assert!(render(PlayLabel::Pause).contains("⏸"));
        assert!(!render(PlayLabel::Pause).contains("▶"));
    }

    #[test]
    fn shows_server_and_hints() {
        let text = render(PlayLabel::Play);
        assert!(text.contains("http://player"));
        assert!(text.contains("toggle"));
    }
}
