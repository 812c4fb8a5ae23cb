use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use arc_swap::ArcSwap;
use tokio::{
    task::{JoinHandle, JoinSet},
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::player::{
    artwork::ArtImage,
    error::ClientError,
    state::{AlbumArt, PlayLabel, PlayerView},
    traits::PlayerApi,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Play,
    Pause,
}

impl ControlAction {
    /// The action that flips the given playback status.
    pub fn toggled_from(is_playing: bool) -> Self {
        if is_playing { Self::Pause } else { Self::Play }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }
}

/// Keeps a [`PlayerView`] in sync with the remote player's reported state.
///
/// Cloning is cheap; clones share the same flag and view.
#[derive(Clone)]
pub struct PlayerStateClient {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn PlayerApi>,
    is_playing: AtomicBool,
    view: ArcSwap<PlayerView>,
    poll_interval: Duration,
    clock: fn() -> u128,
}

impl PlayerStateClient {
    pub fn new(api: Arc<dyn PlayerApi>, poll_interval: Duration) -> Self {
        Self::with_clock(api, poll_interval, unix_millis)
    }

    /// Like [`PlayerStateClient::new`], with the clock used for album-art
    /// cache busting supplied by the caller.
    pub fn with_clock(
        api: Arc<dyn PlayerApi>,
        poll_interval: Duration,
        clock: fn() -> u128,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                is_playing: AtomicBool::new(false),
                view: ArcSwap::from_pointee(PlayerView::default()),
                poll_interval,
                clock,
            }),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.inner.is_playing.load(Ordering::SeqCst)
    }

    pub fn view(&self) -> Arc<PlayerView> {
        self.inner.view.load_full()
    }

    /// Asks the server for the inverse of the last observed status. The view
    /// only changes once the follow-up refresh lands.
    pub fn toggle(&self) -> JoinHandle<()> {
        let action = ControlAction::toggled_from(self.is_playing());
        let client = self.clone();
        tokio::spawn(async move {
            client.send_control(action.as_str()).await;
        })
    }

    /// Sends `action` and then refreshes, whether or not the control call
    /// succeeded. Failures are logged only.
    pub async fn send_control(&self, action: &str) {
        match self.inner.api.control(action).await {
            Ok(()) => debug!("Sent control action {action}"),
            Err(e) => warn!("Control action {action} failed: {e}"),
        }

        if let Err(e) = self.refresh_state().await {
            warn!("State refresh after {action} failed: {e}");
        }
    }

    /// Fetches the current state and applies it to the view.
    ///
    /// The label is rendered from the flag as it stood *before* this fetch;
    /// the fetched status only shows up on the next refresh. On error neither
    /// the view nor the flag is touched. When the song has a picture, the art
    /// is fetched after the flag is written; until it lands the previous
    /// image stays on screen.
    pub async fn refresh_state(&self) -> Result<(), ClientError> {
        let state = self.inner.api.state().await?;

        let art_url = state
            .has_album_art()
            .then(|| self.inner.api.album_art_url((self.inner.clock)()));
        let label = PlayLabel::for_playing(self.is_playing());
        let previous_image = self
            .inner
            .view
            .load()
            .album_art
            .as_ref()
            .and_then(|art| art.image.clone());
        let album_art = art_url.clone().map(|url| AlbumArt {
            url,
            image: previous_image,
        });
        self.inner.view.store(Arc::new(PlayerView { album_art, label }));

        self.set_playing(state.is_playing);

        if let Some(url) = art_url {
            self.load_album_art(url).await;
        }
        Ok(())
    }

    /// Fetches and decodes the art at `url`. A failure clears the art. The
    /// result is dropped if a later refresh already moved the view on.
    async fn load_album_art(&self, url: String) {
        let fetched = self.inner.api.album_art(&url).await;
        let image = match fetched.and_then(|bytes| ArtImage::decode(&bytes)) {
            Ok(image) => Some(Arc::new(image)),
            Err(e) => {
                warn!("Album art {url} unavailable: {e}");
                None
            }
        };

        self.inner.view.rcu(|current| {
            let mut next = PlayerView::clone(current);
            if next.album_art.as_ref().is_some_and(|art| art.url == url) {
                next.album_art = image.clone().map(|image| AlbumArt {
                    url: url.clone(),
                    image: Some(image),
                });
            }
            Arc::new(next)
        });
    }

    /// Refreshes once right away and then once per poll interval until the
    /// returned handle is aborted. Each refresh runs in its own task, so a
    /// slow server never pushes back the next tick. In-flight refreshes are
    /// owned by the polling task and cancelled with it.
    pub fn spawn_polling(&self) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            let mut interval = time::interval(client.inner.poll_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut refreshes = JoinSet::new();

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let client = client.clone();
                        refreshes.spawn(async move {
                            if let Err(e) = client.refresh_state().await {
                                warn!("State refresh failed: {e}");
                            }
                        });
                    }
                    Some(_) = refreshes.join_next(), if !refreshes.is_empty() => {}
                }
            }
        })
    }

    fn set_playing(&self, is_playing: bool) {
        self.inner.is_playing.store(is_playing, Ordering::SeqCst);
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
