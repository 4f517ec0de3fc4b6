use crate::components::Glyph;
use crate::error::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Third-party identity providers offered as social sign-in buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Github,
    Google,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Github, SocialProvider::Google];

    pub fn as_str(self) -> &'static str {
        match self {
            SocialProvider::Github => "github",
            SocialProvider::Google => "google",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Github => "Continue with GitHub",
            SocialProvider::Google => "Continue with Google",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            SocialProvider::Github => Glyph::Github,
            SocialProvider::Google => Glyph::Google,
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialProvider {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(SocialProvider::Github),
            "google" => Ok(SocialProvider::Google),
            other => Err(AuthError::UnknownProvider(other.to_string())),
        }
    }
}
