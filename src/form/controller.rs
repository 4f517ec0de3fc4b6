use super::{CredentialPayload, FormVariant};
use crate::auth::{AuthClient, SignInResponse, SocialProvider};
use crate::error::{AuthError, GENERIC_ERROR};
use crate::toast::{Notifier, ToastKind};
use leptos::{RwSignal, SignalGetUntracked, SignalSet};
use std::cell::Cell;
use std::rc::Rc;

pub const SIGNED_IN_MESSAGE: &str = "Logged in!";

/// Where the form keeps its busy flag.
pub trait LoadingFlag {
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
}

impl LoadingFlag for Cell<bool> {
    fn is_loading(&self) -> bool {
        self.get()
    }

    fn set_loading(&self, loading: bool) {
        self.set(loading);
    }
}

impl LoadingFlag for RwSignal<bool> {
    fn is_loading(&self) -> bool {
        self.get_untracked()
    }

    fn set_loading(&self, loading: bool) {
        self.set(loading);
    }
}

impl<T: LoadingFlag + ?Sized> LoadingFlag for Rc<T> {
    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }
}

/// Holds the loading flag raised until dropped.
///
/// Only one guard exists per flag at a time, so credential and social
/// requests never overlap.
#[must_use]
pub struct LoadingGuard<'a, L: LoadingFlag + ?Sized> {
    flag: &'a L,
}

impl<'a, L: LoadingFlag + ?Sized> LoadingGuard<'a, L> {
    pub fn acquire(flag: &'a L) -> Option<Self> {
        if flag.is_loading() {
            return None;
        }
        flag.set_loading(true);
        Some(Self { flag })
    }
}

impl<L: LoadingFlag + ?Sized> Drop for LoadingGuard<'_, L> {
    fn drop(&mut self) {
        self.flag.set_loading(false);
    }
}

/// How a submit or social action settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Registered,
    SignedIn,
    /// The provider refused the request and said why.
    Rejected(String),
    /// The request did not complete.
    Failed(String),
    /// Neither an error nor `ok`; nothing is shown.
    Inconclusive,
    /// Another request was still in flight.
    Busy,
}

#[derive(Clone)]
pub struct AuthController<C, N, L> {
    client: C,
    notifier: N,
    loading: L,
}

impl<C, N, L> AuthController<C, N, L>
where
    C: AuthClient,
    N: Notifier,
    L: LoadingFlag,
{
    pub fn new(client: C, notifier: N, loading: L) -> Self {
        Self {
            client,
            notifier,
            loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[tracing::instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn submit(&self, variant: FormVariant, payload: CredentialPayload) -> Outcome {
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            tracing::debug!("Submit ignored, a request is already in flight");
            return Outcome::Busy;
        };

        match variant {
            FormVariant::Signup => {
                match self.client.register(payload.into_registration()).await {
                    Ok(()) => Outcome::Registered,
                    Err(err) => self.fail(err),
                }
            }
            FormVariant::Login => {
                let result = self
                    .client
                    .sign_in_credentials(payload.email, payload.password)
                    .await;
                self.settle_sign_in(result)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn social_action(&self, provider: SocialProvider) -> Outcome {
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            tracing::debug!("Social sign-in ignored, a request is already in flight");
            return Outcome::Busy;
        };

        let result = self.client.sign_in_social(provider).await;
        self.settle_sign_in(result)
    }

    fn settle_sign_in(&self, result: Result<SignInResponse, AuthError>) -> Outcome {
        match result {
            Ok(SignInResponse {
                error: Some(error), ..
            }) => {
                let error = if error.trim().is_empty() {
                    GENERIC_ERROR.to_string()
                } else {
                    error
                };
                self.notifier.notify(ToastKind::Error, &error);
                Outcome::Rejected(error)
            }
            Ok(SignInResponse { ok: true, .. }) => {
                self.notifier.notify(ToastKind::Success, SIGNED_IN_MESSAGE);
                Outcome::SignedIn
            }
            Ok(response) => {
                tracing::debug!("Sign-in settled without error or ok: {response:?}");
                Outcome::Inconclusive
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: AuthError) -> Outcome {
        let message = err.toast_message();
        self.notifier.notify(ToastKind::Error, &message);
        match err {
            AuthError::Rejected { status, .. } => {
                tracing::info!("Request rejected with status {status}");
                Outcome::Rejected(message)
            }
            err => {
                tracing::error!("Auth request failed: {err}");
                Outcome::Failed(message)
            }
        }
    }
}
