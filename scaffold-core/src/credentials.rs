//! How automation authenticates to GitHub.
//!
//! A [`GithubCredentials`] value is resolved once, when the GitHub aggregator
//! is built, from the new-style `projen_credentials` option and the
//! deprecated `projen_token_secret` string. See [`resolve`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::facets::Step;

/// Secret holding the personal access token when nothing else is configured.
pub const DEFAULT_TOKEN_SECRET: &str = "PROJEN_GITHUB_TOKEN";
pub const DEFAULT_APP_ID_SECRET: &str = "PROJEN_APP_ID";
pub const DEFAULT_APP_PRIVATE_KEY_SECRET: &str = "PROJEN_APP_PRIVATE_KEY";

const LEGACY_FIELD: &str = "projen_token_secret";
const REPLACEMENT_FIELD: &str = "projen_credentials";
const TOKEN_STEP_ID: &str = "generate_token";
const TOKEN_ACTION: &str = "actions/create-github-app-token@v1";

/// Authentication strategy. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GithubCredentials {
    /// A personal access token stored in a repository secret.
    PersonalAccessToken { secret: String },

    /// A GitHub App whose id and private key are stored in repository secrets.
    /// Workflows mint a short-lived installation token from them.
    App {
        #[serde(default = "default_app_id_secret")]
        app_id_secret: String,
        #[serde(default = "default_private_key_secret")]
        private_key_secret: String,
        /// Narrows the minted token, e.g. `contents: write`. Empty means the
        /// app's full installation permissions.
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        permissions: BTreeMap<String, String>,
    },
}

/// Options for [`GithubCredentials::from_app`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub app_id_secret: String,
    pub private_key_secret: String,
    pub permissions: BTreeMap<String, String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            app_id_secret: default_app_id_secret(),
            private_key_secret: default_private_key_secret(),
            permissions: BTreeMap::new(),
        }
    }
}

impl Default for GithubCredentials {
    fn default() -> Self {
        Self::from_personal_access_token(DEFAULT_TOKEN_SECRET)
    }
}

impl GithubCredentials {
    pub fn from_personal_access_token(secret: impl Into<String>) -> Self {
        Self::PersonalAccessToken {
            secret: secret.into(),
        }
    }

    pub fn from_app(options: AppOptions) -> Self {
        Self::App {
            app_id_secret: options.app_id_secret,
            private_key_secret: options.private_key_secret,
            permissions: options.permissions,
        }
    }

    /// Expression a workflow step uses to read the token.
    pub fn token_ref(&self) -> String {
        match self {
            Self::PersonalAccessToken { secret } => format!("${{{{ secrets.{secret} }}}}"),
            Self::App { .. } => format!("${{{{ steps.{TOKEN_STEP_ID}.outputs.token }}}}"),
        }
    }

    /// Steps that must run before [`Self::token_ref`] is usable.
    pub fn setup_steps(&self) -> Vec<Step> {
        match self {
            Self::PersonalAccessToken { .. } => Vec::new(),
            Self::App {
                app_id_secret,
                private_key_secret,
                permissions,
            } => {
                let mut step = Step::uses("Generate token", TOKEN_ACTION)
                    .with_id(TOKEN_STEP_ID)
                    .with_input("app-id", format!("${{{{ secrets.{app_id_secret} }}}}"))
                    .with_input("private-key", format!("${{{{ secrets.{private_key_secret} }}}}"));
                for (scope, access) in permissions {
                    step = step.with_input(format!("permission-{scope}"), access.clone());
                }
                vec![step]
            }
        }
    }

    /// One-line summary for listings.
    pub fn describe(&self) -> String {
        match self {
            Self::PersonalAccessToken { secret } => format!("personal access token ({secret})"),
            Self::App { app_id_secret, .. } => format!("github app ({app_id_secret})"),
        }
    }
}

/// Resolve the credentials policy from the new-style value and the legacy
/// secret name.
///
/// Supplying both is a configuration error. A lone legacy name becomes a
/// personal access token; a lone new-style value is returned unchanged;
/// neither yields the [`DEFAULT_TOKEN_SECRET`] token.
pub fn resolve(
    credentials: Option<GithubCredentials>,
    legacy_secret: Option<String>,
) -> Result<GithubCredentials, ScaffoldError> {
    match (credentials, legacy_secret) {
        (Some(_), Some(_)) => Err(ScaffoldError::ConflictingCredentialConfiguration {
            legacy: LEGACY_FIELD,
            replacement: REPLACEMENT_FIELD,
        }),
        (None, Some(secret)) => {
            tracing::warn!(
                field = LEGACY_FIELD,
                "deprecated credential field in use; prefer `{REPLACEMENT_FIELD}`"
            );
            Ok(GithubCredentials::from_personal_access_token(secret))
        }
        (Some(credentials), None) => {
            tracing::debug!(credentials = %credentials.describe(), "using configured credentials");
            Ok(credentials)
        }
        (None, None) => {
            tracing::debug!(secret = DEFAULT_TOKEN_SECRET, "using default credentials");
            Ok(GithubCredentials::default())
        }
    }
}

fn default_app_id_secret() -> String {
    DEFAULT_APP_ID_SECRET.to_string()
}

fn default_private_key_secret() -> String {
    DEFAULT_APP_PRIVATE_KEY_SECRET.to_string()
}
