#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,
    TogglePlayPause,
    Refresh,
}
