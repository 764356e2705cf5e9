//! HTTP adapter for the posts endpoint.

use std::time::Duration;

use async_trait::async_trait;
use onbrand_api_types::PostsResponse;
use reqwest::{Client, Response, Url};
use tracing::debug;

use super::error::InfraError;
use crate::application::repos::{PostSource, SourceError};
use crate::domain::posts::Post;

pub const POSTS_PATH: &str = "api/posts/";

#[derive(Clone, Debug)]
pub struct PostsApi {
    client: Client,
    base: Url,
}

impl PostsApi {
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, InfraError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(|err| InfraError::http(err.to_string()))?;
        Ok(Self {
            client,
            base: normalize_base(base),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("onbrand/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, SourceError> {
        self.base.join(path).map_err(SourceError::transport)
    }

    async fn handle(resp: Response) -> Result<PostsResponse, SourceError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }
        let bytes = resp.bytes().await.map_err(SourceError::transport)?;
        serde_json::from_slice(&bytes).map_err(|err| SourceError::Decode(err.to_string()))
    }
}

#[async_trait]
impl PostSource for PostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, SourceError> {
        let url = self.url(POSTS_PATH)?;
        debug!(target: "onbrand::api", url = %url, "fetching posts");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SourceError::transport)?;
        let body = Self::handle(resp).await?;
        Ok(body.posts)
    }
}

/// Treat the base as a directory so relative joins keep any path prefix.
pub fn normalize_base(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_without_trailing_slash_keeps_its_prefix() {
        let base = Url::parse("https://cms.example.com/backend").expect("url");
        let api = PostsApi::new(&base, Duration::from_secs(5)).expect("api");
        assert_eq!(
            api.url(POSTS_PATH).expect("join").as_str(),
            "https://cms.example.com/backend/api/posts/"
        );
    }

    #[test]
    fn bare_host_joins_at_root() {
        let base = Url::parse("http://localhost:8000").expect("url");
        let api = PostsApi::new(&base, Duration::from_secs(5)).expect("api");
        assert_eq!(
            api.url(POSTS_PATH).expect("join").as_str(),
            "http://localhost:8000/api/posts/"
        );
    }

    #[test]
    fn user_agent_names_the_crate() {
        assert!(PostsApi::user_agent().starts_with("onbrand/"));
    }
}
