use super::{RegisterOutcome, RegistrationRequest, SignInResponse, SocialProvider};
use crate::error::AuthError;

/// The requests the auth form sends across the provider boundary.
///
/// Sign-in never asks the provider to navigate away; the form reports the
/// result itself.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn register(&self, request: RegistrationRequest) -> Result<(), AuthError>;

    async fn sign_in_credentials(
        &self,
        email: String,
        password: String,
    ) -> Result<SignInResponse, AuthError>;

    async fn sign_in_social(&self, provider: SocialProvider) -> Result<SignInResponse, AuthError>;
}

impl<T: AuthClient + ?Sized> AuthClient for &T {
    async fn register(&self, request: RegistrationRequest) -> Result<(), AuthError> {
        (**self).register(request).await
    }

    async fn sign_in_credentials(
        &self,
        email: String,
        password: String,
    ) -> Result<SignInResponse, AuthError> {
        (**self).sign_in_credentials(email, password).await
    }

    async fn sign_in_social(&self, provider: SocialProvider) -> Result<SignInResponse, AuthError> {
        (**self).sign_in_social(provider).await
    }
}

/// Talks to the server functions in [`super::api`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnClient;

impl AuthClient for ServerFnClient {
    async fn register(&self, request: RegistrationRequest) -> Result<(), AuthError> {
        let RegistrationRequest {
            email,
            name,
            password,
        } = request;

        match super::register_action(email, name, password).await? {
            RegisterOutcome::Registered => Ok(()),
            RegisterOutcome::Rejected { status, message } => {
                Err(AuthError::Rejected { status, message })
            }
        }
    }

    async fn sign_in_credentials(
        &self,
        email: String,
        password: String,
    ) -> Result<SignInResponse, AuthError> {
        Ok(super::credentials_sign_in(email, password).await?)
    }

    async fn sign_in_social(&self, provider: SocialProvider) -> Result<SignInResponse, AuthError> {
        Ok(super::social_sign_in(provider.to_string()).await?)
    }
}
