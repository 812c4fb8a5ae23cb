use async_trait::async_trait;
use tracing::trace;

use crate::player::{
    config::ClientConfig, error::ClientError, state::PlaybackState, traits::PlayerApi,
};

pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn control_url(&self, action: &str) -> String {
        format!(
            "{}/api/control?action={}",
            self.base_url,
            urlencoding::encode(action)
        )
    }

    fn state_url(&self) -> String {
        format!("{}/api/state", self.base_url)
    }
}

#[async_trait]
impl PlayerApi for ApiService {
    async fn control(&self, action: &str) -> Result<(), ClientError> {
        self.client
            .get(self.control_url(action))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn state(&self) -> Result<PlaybackState, ClientError> {
        let body = self
            .client
            .get(self.state_url())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        trace!("State response: {body}");

        Ok(serde_json::from_str(&body)?)
    }

    async fn album_art(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        trace!("Album art response: {} bytes", bytes.len());

        Ok(bytes.to_vec())
    }

    fn album_art_url(&self, timestamp: u128) -> String {
        format!("{}/album-art?{timestamp}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;
    use crate::player::artwork::{ArtImage, png_bytes};

    /// Serves one canned response on a local port. The handle yields the
    /// request head the server received.
    async fn serve_once(
        status: &'static str,
        content_type: &'static str,
        body: Vec<u8>,
    ) -> (ApiService, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            let mut response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            response.extend_from_slice(&body);
            socket.write_all(&response).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&head).into_owned()
        });

        let config = ClientConfig {
            base_url: format!("http://{addr}"),
            ..Default::default()
        };
        (ApiService::new(&config).unwrap(), server)
    }

    fn service() -> ApiService {
        let config = ClientConfig {
            base_url: "http://player.local:3000".to_string(),
            ..Default::default()
        };
        ApiService::new(&config).unwrap()
    }

    #[test]
    fn builds_endpoint_urls() {
        let api = service();
        assert_eq!(
            api.control_url("play"),
            "http://player.local:3000/api/control?action=play"
        );
        assert_eq!(api.state_url(), "http://player.local:3000/api/state");
        assert_eq!(
            api.album_art_url(1_700_000_000_123),
            "http://player.local:3000/album-art?1700000000123"
        );
    }

    #[test]
    fn control_action_is_query_encoded() {
        assert_eq!(
            service().control_url("seek to&end"),
            "http://player.local:3000/api/control?action=seek%20to%26end"
        );
    }

    #[tokio::test]
    async fn state_is_decoded_from_a_live_response() {
        let (api, server) = serve_once(
            "200 OK",
            "application/json",
            br#"{"isPlaying":true,"currentSong":{"picture":true}}"#.to_vec(),
        )
        .await;

        let state = api.state().await.unwrap();
        assert!(state.is_playing);
        assert!(state.has_album_art());
        assert!(server.await.unwrap().starts_with("GET /api/state HTTP/1.1"));
    }

    #[tokio::test]
    async fn malformed_state_body_is_a_decode_error() {
        let (api, _server) =
            serve_once("200 OK", "text/html", b"<html>oops</html>".to_vec()).await;

        assert!(matches!(api.state().await, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn server_error_status_is_an_http_error() {
        let (api, _server) = serve_once(
            "500 Internal Server Error",
            "application/json",
            br#"{"isPlaying":true}"#.to_vec(),
        )
        .await;

        assert!(matches!(api.state().await, Err(ClientError::Http(_))));
    }

    #[tokio::test]
    async fn control_action_reaches_the_server() {
        let (api, server) = serve_once("200 OK", "text/plain", b"ok".to_vec()).await;

        api.control("pause").await.unwrap();
        assert!(
            server
                .await
                .unwrap()
                .starts_with("GET /api/control?action=pause HTTP/1.1")
        );
    }

    #[tokio::test]
    async fn control_error_status_is_an_http_error() {
        let (api, _server) = serve_once("404 Not Found", "text/plain", Vec::new()).await;

        assert!(matches!(api.control("play").await, Err(ClientError::Http(_))));
    }

    #[tokio::test]
    async fn album_art_bytes_are_fetched() {
        let png = png_bytes(3, 3, [1, 2, 3]);
        let (api, server) = serve_once("200 OK", "image/png", png.clone()).await;

        let bytes = api.album_art(&api.album_art_url(99)).await.unwrap();
        assert_eq!(bytes, png);
        assert_eq!(ArtImage::decode(&bytes).unwrap().pixel(1, 1), [1, 2, 3]);
        assert!(server.await.unwrap().starts_with("GET /album-art?99 HTTP/1.1"));
    }

    #[tokio::test]
    async fn unreachable_server_is_an_http_error() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: std::time::Duration::from_millis(200),
            ..Default::default()
        };
        let api = ApiService::new(&config).unwrap();

        assert!(matches!(api.state().await, Err(ClientError::Http(_))));
        assert!(matches!(api.control("play").await, Err(ClientError::Http(_))));
    }
}
