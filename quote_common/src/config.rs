//! Client configuration.
//!
//! `ClientConfig` is built once, from the environment in the binary or by hand in
//! tests, and passed to client construction. Nothing here is global.
use std::fmt;
use std::time::Duration;

use rand::Rng;

use crate::filters::default_filters;
use crate::net::{DEFAULT_BASE_URL, POOL_MAX_IDLE_PER_HOST, REQUEST_TIMEOUT};
use crate::sampling::{random_default_filter, time_seeded_rng};
use crate::session::Login;

/// Variable holding the API key.
pub const API_KEY_VAR: &str = "FAVQS_APIKEY";
/// Variable overriding the API root.
pub const BASE_URL_VAR: &str = "FAVQS_BASE_URL";
/// Variable holding the login used for session creation.
pub const LOGIN_VAR: &str = "FAVQS_LOGIN";
/// Variable holding the password used for session creation.
pub const PASSWORD_VAR: &str = "FAVQS_PASSWORD";

/// Settings for building a `QuoteClient`.
#[derive(Clone)]
pub struct ClientConfig {
    /// Raw API key; trimmed and validated when the client is built.
    pub api_key: Option<String>,
    /// Name of the variable the key came from, for error messages.
    pub api_key_var: String,
    /// API root without the endpoint path.
    pub base_url: String,
    /// Credentials sent with the session request, if any.
    pub login: Option<Login>,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// Idle pooled connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub proxy_from_env: bool,
    /// Filters offered by [`ClientConfig::random_default_filter`].
    pub default_filters: Vec<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_var", &self.api_key_var)
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .field("timeout", &self.timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("proxy_from_env", &self.proxy_from_env)
            .field("default_filters", &self.default_filters)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_var: API_KEY_VAR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            login: None,
            timeout: REQUEST_TIMEOUT,
            pool_max_idle_per_host: POOL_MAX_IDLE_PER_HOST,
            proxy_from_env: true,
            default_filters: default_filters(),
        }
    }
}

impl ClientConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let login = match (get(LOGIN_VAR), get(PASSWORD_VAR)) {
            (Some(login), Some(password)) => Some(Login {
                login: login.trim().to_string(),
                password,
            }),
            _ => None,
        };

        Self {
            api_key: get(API_KEY_VAR),
            base_url: get(BASE_URL_VAR)
                .map(|url| url.trim().to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            login,
            ..Self::default()
        }
    }

    /// Pick one of the default filters with a freshly seeded generator.
    pub fn random_default_filter(&self) -> Option<&str> {
        self.random_default_filter_with(&mut time_seeded_rng())
    }

    /// Pick one of the default filters using `rng`.
    pub fn random_default_filter_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        random_default_filter(&self.default_filters, rng)
    }
}
