use leptos::*;
use serde::{Deserialize, Serialize};

/// Body of a registration request sent to the identity service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterOutcome {
    Registered,
    Rejected { status: u16, message: Option<String> },
}

/// Result shape shared by credential and social sign-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub url: Option<String>,
}

impl SignInResponse {
    pub fn success(status: u16) -> Self {
        Self {
            status,
            ok: true,
            ..Self::default()
        }
    }

    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            status,
            ..Self::default()
        }
    }
}

#[server(RegisterAction, "/api")]
#[tracing::instrument(skip(password))]
pub async fn register_action(
    email: String,
    name: String,
    password: String,
) -> Result<RegisterOutcome, ServerFnError> {
    use crate::error::AuthError;

    let upstream = crate::auth::get_upstream()?;
    let request = RegistrationRequest {
        email,
        name,
        password,
    };

    match upstream.register(&request).await {
        Ok(()) => Ok(RegisterOutcome::Registered),
        Err(AuthError::Rejected { status, message }) => {
            tracing::info!("Registration rejected with status {status}");
            Ok(RegisterOutcome::Rejected { status, message })
        }
        Err(err) => {
            tracing::error!("Registration request failed: {err}");
            Err(ServerFnError::ServerError(err.to_string()))
        }
    }
}

#[server(CredentialsSignIn, "/api")]
#[tracing::instrument(skip(password))]
pub async fn credentials_sign_in(
    email: String,
    password: String,
) -> Result<SignInResponse, ServerFnError> {
    let upstream = crate::auth::get_upstream()?;

    upstream
        .sign_in_credentials(&email, &password)
        .await
        .map_err(|err| {
            tracing::error!("Credential sign-in failed: {err}");
            ServerFnError::ServerError(err.to_string())
        })
}

#[server(SocialSignIn, "/api")]
#[tracing::instrument]
pub async fn social_sign_in(provider: String) -> Result<SignInResponse, ServerFnError> {
    let provider = match provider.parse::<crate::auth::SocialProvider>() {
        Ok(provider) => provider,
        Err(err) => {
            tracing::info!("Refusing sign-in: {err}");
            return Ok(SignInResponse::failure(400, err.to_string()));
        }
    };

    let upstream = crate::auth::get_upstream()?;
    upstream.sign_in_oauth(provider).await.map_err(|err| {
        tracing::error!("Social sign-in with {provider} failed: {err}");
        ServerFnError::ServerError(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_response_tolerates_missing_fields() {
        let parsed: SignInResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(parsed, SignInResponse { ok: true, ..Default::default() });

        let parsed: SignInResponse =
            serde_json::from_str(r#"{"error":"Invalid credentials","status":401}"#).unwrap();
        assert_eq!(parsed, SignInResponse::failure(401, "Invalid credentials"));
    }

    #[test]
    fn registration_debug_hides_password() {
        let request = RegistrationRequest {
            email: "a@b.com".into(),
            name: "A".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{request:?}").contains("hunter2"));
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn unknown_provider_is_refused_before_dispatch() {
        let response = social_sign_in("myspace".into()).await.unwrap();
        assert!(!response.ok);
        assert_eq!(response.status, 400);
        assert_eq!(
            response.error.as_deref(),
            Some("unknown identity provider `myspace`")
        );
    }
}
