use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Widget,
};

use crate::{
    player::state::PlayerView,
    ui::{
        app::App,
        components::{album_art::AlbumArtWidget, controls::PlayerControlsWidget},
    },
    util::colors,
};

/// Full-screen player: album art on top, play/pause row below.
pub struct PlayerScreen<'a> {
    view: &'a PlayerView,
    server: &'a str,
}

impl<'a> PlayerScreen<'a> {
    pub fn new(view: &'a PlayerView, server: &'a str) -> Self {
        Self { view, server }
    }
}

impl Widget for PlayerScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(area);

        AlbumArtWidget::new(self.view.album_art.as_ref()).render(chunks[0], buf);
        PlayerControlsWidget::new(self.view.label, self.server).render(chunks[1], buf);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let view = self.client.view();
        PlayerScreen::new(&view, &self.server).render(area, buf);
    }
}
