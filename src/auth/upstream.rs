use super::{RegistrationRequest, SignInResponse, SocialProvider};
use crate::config::Config;
use crate::error::{extract_message, AuthError, GENERIC_ERROR};
use leptos::ServerFnError;
use serde::Serialize;
use std::sync::OnceLock;

static UPSTREAM: OnceLock<IdentityClient> = OnceLock::new();

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
    redirect: bool,
}

#[derive(Serialize)]
struct OAuthBody {
    redirect: bool,
}

/// HTTP client for the upstream identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.url("/api/register"))
            .json(request)
            .send()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;
        Err(AuthError::Rejected {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignInResponse, AuthError> {
        let body = CredentialsBody {
            email,
            password,
            redirect: false,
        };
        self.sign_in("/api/auth/signin/credentials", &body).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn sign_in_oauth(&self, provider: SocialProvider) -> Result<SignInResponse, AuthError> {
        let path = format!("/api/auth/signin/{provider}");
        self.sign_in(&path, &OAuthBody { redirect: false }).await
    }

    async fn sign_in<B: Serialize>(&self, path: &str, body: &B) -> Result<SignInResponse, AuthError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        Ok(interpret_sign_in(status, &text))
    }
}

/// Maps a raw sign-in response onto [`SignInResponse`].
///
/// A non-2xx status always yields `ok == false` with some error text. A 2xx
/// body that does not decode is passed on as an inconclusive result.
pub(crate) fn interpret_sign_in(status: u16, body: &str) -> SignInResponse {
    let success = (200..300).contains(&status);
    let parsed = serde_json::from_str::<SignInResponse>(body).ok();

    if success {
        let Some(mut response) = parsed else {
            tracing::warn!("Undecodable sign-in response with status {status}");
            return SignInResponse {
                status,
                ..SignInResponse::default()
            };
        };
        response.status = status;
        return response;
    }

    let error = parsed
        .and_then(|response| response.error)
        .filter(|error| !error.trim().is_empty())
        .or_else(|| extract_message(body))
        .unwrap_or_else(|| GENERIC_ERROR.to_string());
    SignInResponse::failure(status, error)
}

#[tracing::instrument(skip(config))]
pub fn init_upstream(config: &Config) -> Result<(), String> {
    UPSTREAM
        .set(IdentityClient::new(config.identity_url.clone()))
        .map_err(|_| "Identity client already initialized".to_string())
}

pub fn get_upstream() -> Result<&'static IdentityClient, ServerFnError> {
    UPSTREAM.get().ok_or_else(|| {
        tracing::error!("Identity client used before init_upstream()");
        ServerFnError::ServerError(AuthError::NotConfigured.to_string())
    })
}
