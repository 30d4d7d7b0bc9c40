use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, OsrmClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers);
    if let Some(timeout) = config.routing().timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[derive(Error, Debug)]
pub enum OsrmClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_identifies_itself_and_accepts_json() -> Result<(), OsrmClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("user-agent", concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .match_header("accept", "application/json")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().routing_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", config.routing().url(), "/")).send().await?;

        // Verify that the call came in with the expected headers
        mock.assert();

        Ok(())
    }
}
