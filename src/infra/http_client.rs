use crate::app::ports::{PageTransport, TransportError};
use crate::config::HttpConfig;
use async_trait::async_trait;

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

/// Maps a reqwest failure onto the fetcher's retry classes.
pub fn classify(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_builder() {
        TransportError::Unexpected(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

#[async_trait]
impl PageTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String, TransportError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(&e))?
            .error_for_status()
            .map_err(|e| classify(&e))?;
        resp.text().await.map_err(|e| classify(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_unexpected() {
        let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
        let err = transport.get_text("not a url").await.unwrap_err();
        assert!(matches!(err, TransportError::Unexpected(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_refused_connection_is_network() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
        let err = transport
            .get_text(&format!("http://{}/boxscores/", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)), "got {:?}", err);
    }
}
