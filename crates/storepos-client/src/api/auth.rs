//! Auth API.

use crate::client::StorePosClient;
use crate::error::{Error, Result};
use crate::types::{LoginRequest, LoginResponse};

/// Auth API client.
pub struct AuthApi {
    client: StorePosClient,
}

impl AuthApi {
    pub(crate) fn new(client: StorePosClient) -> Self {
        Self { client }
    }

    /// Log in and store the returned bearer token on the client.
    ///
    /// Returns `Ok(true)` when the server accepts the credentials, and
    /// `Ok(false)` when it rejects them with a `success: false` body. Any
    /// other status code or a transport failure is an `Err`. A rejected
    /// login leaves a previously stored token in place.
    pub async fn login(
        &self,
        username_or_email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<bool> {
        let request = LoginRequest {
            username_or_email: username_or_email.into(),
            password: password.into(),
        };

        let response: LoginResponse = self.client.post("auth/login", &request).await?;

        if !response.success {
            tracing::warn!(
                reason = response.message.as_deref().unwrap_or("unknown"),
                "login rejected"
            );
            return Ok(false);
        }

        let Some(data) = response.data else {
            // Accepted login without a token payload breaks the auth contract
            return Err(Error::Api {
                status: 200,
                message: "login response missing token payload".to_string(),
            });
        };

        self.client.set_token(data.access_token);
        tracing::debug!("login succeeded");
        Ok(true)
    }
}
