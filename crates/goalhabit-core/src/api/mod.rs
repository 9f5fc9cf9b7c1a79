//! HTTP/JSON transport for the GoalHabit REST API.
//!
//! [`ApiClient`] resolves endpoint paths against the base URL, attaches the
//! bearer token from the [`TokenStore`] to every request and turns non-2xx
//! answers into [`CoreError::Server`]. It never retries.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

use crate::error::{CoreError, Result};
use crate::storage::TokenStore;

/// Shared, cheaply clonable API handle.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client for `base_url`. A trailing slash is added if missing
    /// so relative endpoint paths resolve beneath it.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(&base)?,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        tracing::debug!("api request {} {}", method, url);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.tokens.token()?.filter(|t| !t.trim().is_empty()) {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "api request rejected: {}", body);
            return Err(CoreError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let resp = self.send(builder).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.json(self.request(Method::GET, path)?).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.json(self.request(Method::GET, path)?.query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.json(self.request(Method::POST, path)?.json(body)).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.json(self.request(Method::PATCH, path)?.json(body)).await
    }

    /// Send a request whose response body is ignored.
    pub(crate) async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.request(method, path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute::<()>(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTokenStore;

    #[test]
    fn base_url_gets_trailing_slash() {
        let api = ApiClient::new("http://localhost:8000/api", Arc::new(MemoryTokenStore::new()))
            .unwrap();
        assert_eq!(api.base_url().as_str(), "http://localhost:8000/api/");
        let joined = api.base_url().join("habits/3").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:8000/api/habits/3");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ApiClient::new("not a url", Arc::new(MemoryTokenStore::new()));
        assert!(matches!(result, Err(CoreError::Url(_))));
    }
}
