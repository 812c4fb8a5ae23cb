pub mod album_art;
pub mod app;
pub mod controls;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
}
