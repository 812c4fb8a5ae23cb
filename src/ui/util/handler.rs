use tracing::{info, warn};

use crate::ui::{
    app::App,
    input::InputHandler,
    message::AppMessage,
    tui::{TerminalEvent, Tui},
};

pub const POLL_TASK: &str = "poll";

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_event(app, evt, tui)?;
        }
        Ok(())
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init => Self::start_polling(app),
            TerminalEvent::FocusGained => {
                Self::set_focus(app, true);
                tui.clear()?;
            }
            TerminalEvent::FocusLost => Self::set_focus(app, false),
            TerminalEvent::Key(key) => {
                if let Some(message) = InputHandler::handle_key(key) {
                    Self::handle_message(app, message);
                }
            }
            TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
        }

        Ok(())
    }

    /// Drawing pauses while the terminal is in the background. Polling keeps
    /// going so the view is current when focus returns.
    pub fn set_focus(app: &mut App, focused: bool) {
        app.has_focus = focused;
    }

    pub fn start_polling(app: &mut App) {
        info!("Polling {} for player state", app.server);
        app.task_manager
            .spawn(POLL_TASK, app.client.spawn_polling());
    }

    pub fn handle_message(app: &mut App, message: AppMessage) {
        match message {
            AppMessage::Quit => app.should_quit = true,
            AppMessage::TogglePlayPause => {
                app.task_manager.detach(app.client.toggle());
            }
            AppMessage::Refresh => {
                let client = app.client.clone();
                app.task_manager.detach(tokio::spawn(async move {
                    if let Err(e) = client.refresh_state().await {
                        warn!("Manual refresh failed: {e}");
                    }
                }));
            }
        }
    }
}
