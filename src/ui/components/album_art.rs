use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    symbols::{self, border},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    player::{artwork::ArtImage, state::AlbumArt},
    util::colors,
};

/// Album-art region. Draws the fetched image with half blocks, a loading
/// note while the first fetch is in flight, and a placeholder when cleared.
pub struct AlbumArtWidget<'a> {
    art: Option<&'a AlbumArt>,
}

impl<'a> AlbumArtWidget<'a> {
    pub fn new(art: Option<&'a AlbumArt>) -> Self {
        Self { art }
    }
}

impl Widget for AlbumArtWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::Set {
                bottom_left: symbols::line::ROUNDED.vertical_right,
                bottom_right: symbols::line::ROUNDED.vertical_left,
                ..symbols::border::ROUNDED
            })
            .title_top("album art")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(art) = self.art else {
            Paragraph::new(Line::from("no album art".fg(colors::NEUTRAL)))
                .centered()
                .render(inner, buf);
            return;
        };

        let Some(image) = art.image.as_deref() else {
            Paragraph::new(Text::from(vec![
                Line::from("loading album art".fg(colors::NEUTRAL)),
                Line::from(art.url.as_str().fg(colors::ACCENT)),
            ]))
            .centered()
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        render_pixels(image, chunks[0], buf);

        let caption = format!(
            "{}×{} · {:.1} KiB",
            image.source_width,
            image.source_height,
            image.byte_len as f64 / 1024.0
        );
        Paragraph::new(Line::from(caption.fg(colors::NEUTRAL)))
            .centered()
            .render(chunks[1], buf);
    }
}

/// Each cell shows one pixel column and two pixel rows through `▀`.
fn render_pixels(image: &ArtImage, area: Rect, buf: &mut Buffer) {
    let cols = area.width.min(area.height.saturating_mul(2));
    if cols == 0 {
        return;
    }
    let rows = cols.div_ceil(2).min(area.height);
    let x0 = area.x + (area.width - cols) / 2;
    let y0 = area.y + (area.height - rows) / 2;

    let side = image.side();
    let scale = |v: u16| u32::from(v) * side / u32::from(cols);

    for row in 0..rows {
        for col in 0..cols {
            let [r, g, b] = image.pixel(scale(col), scale(row * 2));
            let [r2, g2, b2] = image.pixel(scale(col), scale(row * 2 + 1));
            if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                cell.set_symbol("▀")
                    .set_fg(Color::Rgb(r, g, b))
                    .set_bg(Color::Rgb(r2, g2, b2));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{player::artwork::png_bytes, ui::components::buffer_text};

    const URL: &str = "http://player/album-art?42";

    fn render(art: Option<&AlbumArt>) -> Buffer {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        AlbumArtWidget::new(art).render(area, &mut buf);
        buf
    }

    #[test]
    fn draws_the_fetched_image() {
        let image = ArtImage::decode(&png_bytes(2, 2, [255, 0, 0])).unwrap();
        let art = AlbumArt {
            url: URL.to_string(),
            image: Some(Arc::new(image)),
        };
        let buf = render(Some(&art));

        let painted = buf
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "▀" && cell.fg == Color::Rgb(255, 0, 0))
            .count();
        assert!(painted > 0);
        assert!(buffer_text(&buf).contains("2×2"));
    }

    #[test]
    fn shows_url_while_loading() {
        let art = AlbumArt {
            url: URL.to_string(),
            image: None,
        };
        let text = buffer_text(&render(Some(&art)));

        assert!(text.contains(URL));
        assert!(text.contains("loading album art"));
        assert!(!text.contains("no album art"));
    }

    #[test]
    fn shows_placeholder_when_cleared() {
        assert!(buffer_text(&render(None)).contains("no album art"));
    }
}
