use std::sync::Arc;

use ratatui::Frame;

use crate::{
    http::ApiService,
    player::{PlayerStateClient, config::ClientConfig},
    util::task::TaskManager,
};

use super::{tui, util::handler::EventHandler};

pub struct App {
    pub client: PlayerStateClient,
    pub server: String,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ClientConfig) -> color_eyre::Result<Self> {
        let api = ApiService::new(&config)?;
        let server = api.base_url().to_string();
        let client = PlayerStateClient::new(Arc::new(api), config.poll_interval);

        Ok(Self {
            client,
            server,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }
}
