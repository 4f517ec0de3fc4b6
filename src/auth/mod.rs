mod api;
mod client;
mod provider;
#[cfg(feature = "ssr")]
mod upstream;

pub use api::*;
pub use client::{AuthClient, ServerFnClient};
pub use provider::SocialProvider;
#[cfg(feature = "ssr")]
pub use upstream::{get_upstream, init_upstream, IdentityClient};
