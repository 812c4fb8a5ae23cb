use async_trait::async_trait;

use crate::player::{error::ClientError, state::PlaybackState};

/// HTTP surface of the remote player, as seen by the client.
#[async_trait]
pub trait PlayerApi: Send + Sync {
    /// Sends a control action. The response body carries no meaning.
    async fn control(&self, action: &str) -> Result<(), ClientError>;

    async fn state(&self) -> Result<PlaybackState, ClientError>;

    /// Fetches the image bytes behind an [`PlayerApi::album_art_url`].
    async fn album_art(&self, url: &str) -> Result<Vec<u8>, ClientError>;

    fn album_art_url(&self, timestamp: u128) -> String;
}
