//! Remote Menu Source
//!
//! Read-only access to the canonical menu served as JSON.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::NewMenuItem;
use crate::error::{MenuError, MenuResult};

/// Where the menu comes from when the local store is empty
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_menu(&self) -> MenuResult<Vec<NewMenuItem>>;
}

/// Response document: `{ "menu": [ ... ] }`
#[derive(Debug, Deserialize)]
struct MenuResponse {
    menu: Vec<NewMenuItem>,
}

/// Fetches the menu with a plain HTTP GET
pub struct HttpMenuSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMenuSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

fn fetch_err(e: impl std::fmt::Display) -> MenuError {
    log::error!("Error fetching menu from server: {}", e);
    MenuError::RemoteFetchFailed(e.to_string())
}

#[async_trait]
impl RemoteSource for HttpMenuSource {
    async fn fetch_menu(&self) -> MenuResult<Vec<NewMenuItem>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;

        // Read as text first so a malformed body is reported as a parse error
        let body = response.text().await.map_err(fetch_err)?;
        let parsed: MenuResponse = serde_json::from_str(&body).map_err(fetch_err)?;

        log::info!("Fetched {} menu items from server", parsed.menu.len());
        Ok(parsed.menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn source_for(server: &MockServer) -> HttpMenuSource {
        HttpMenuSource::new(format!("{}/capstone.json", server.uri()), Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_parses_menu() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/capstone.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "menu": [
                    {"name": "Greek Salad", "price": 12.99, "description": "Fresh",
                     "image": "greek.jpg", "category": "starters"},
                    {"name": "Pasta", "price": "18.99", "description": "Penne",
                     "image": "pasta.jpg", "category": "mains"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let menu = source_for(&server).await.fetch_menu().await.unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].name, "Greek Salad");
        assert_eq!(menu[0].price, 12.99);
        assert_eq!(menu[1].category, "mains");
        assert_eq!(menu[1].price, 18.99);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = source_for(&server).await.fetch_menu().await;
        assert!(matches!(result, Err(MenuError::RemoteFetchFailed(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": []}"))
            .mount(&server)
            .await;

        let result = source_for(&server).await.fetch_menu().await;
        assert!(matches!(result, Err(MenuError::RemoteFetchFailed(_))));
    }
}
