use crate::api::ApiClient;
use crate::error::Result;
use crate::model::{LoginRequest, MeResponse, RegisterRequest, TokenResponse};

#[derive(Clone)]
pub struct AuthRepository {
    api: ApiClient,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Create an account and keep the returned session token.
    pub async fn register(&self, req: &RegisterRequest) -> Result<()> {
        let resp: TokenResponse = self.api.post("auth/register", req).await?;
        self.api.tokens().save(&resp.token)?;
        tracing::info!(email = %req.email, "registered");
        Ok(())
    }

    /// Log in and keep the returned session token.
    pub async fn login(&self, req: &LoginRequest) -> Result<()> {
        let resp: TokenResponse = self.api.post("auth/login", req).await?;
        self.api.tokens().save(&resp.token)?;
        tracing::info!(email = %req.email, "logged in");
        Ok(())
    }

    pub async fn me(&self) -> Result<MeResponse> {
        self.api.get("auth/me").await
    }

    /// Session probe: any failure counts as logged out.
    pub async fn is_authorized(&self) -> bool {
        match self.me().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("session probe failed: {}", e);
                false
            }
        }
    }

    pub async fn logout(&self) -> Result<()> {
        self.api.tokens().clear()
    }
}
