//! Blocking client for the FavQs API.
//!
//! Construction opens a session: the API key goes out in the `Authorization` header,
//! the returned user token is kept and sent with every later request. A
//! `QuoteClient` therefore either exists fully authenticated or not at all.
use log::{debug, warn};
use quote_common::net::{self, QOTD_PATH, QUOTES_PATH, SESSION_PATH, USER_TOKEN_HEADER};
use quote_common::sampling::{select_quotes, time_seeded_rng};
use quote_common::session::{SessionRequest, SessionResponse};
use quote_common::{ClientConfig, ClientError, FilterType, Quote, QuoteOfDay, QuotePage, Result};
use rand::Rng;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

/// Session-authenticated API client.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl QuoteClient {
    /// Build a client from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Build a client and open a session with the API.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ClientError::MissingCredential(config.api_key_var.clone()))?;

        let http = build_http_client(config)?;

        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&format!("Token token={key}"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut client = QuoteClient {
            http,
            base_url: config.base_url.clone(),
            headers,
        };
        client.open_session(config)?;
        Ok(client)
    }

    fn open_session(&mut self, config: &ClientConfig) -> Result<()> {
        let url = net::endpoint(&self.base_url, SESSION_PATH);
        debug!("Opening session at {}", url);

        let mut request = self.http.post(&url).headers(self.headers.clone());
        if let Some(login) = &config.login {
            request = request.json(&SessionRequest { user: login });
        }

        let session: SessionResponse = self.fetch_json(request)?;
        let token = session.into_token()?;

        let mut user_token = HeaderValue::from_str(&token)?;
        user_token.set_sensitive(true);
        self.headers
            .insert(HeaderName::from_static(USER_TOKEN_HEADER), user_token);
        Ok(())
    }

    /// Fetch today's quote.
    ///
    /// Any status other than 200 is rejected with `HttpStatus` before the body is
    /// decoded.
    pub fn get_quote_of_day(&self) -> Result<QuoteOfDay> {
        let url = net::endpoint(&self.base_url, QOTD_PATH);
        debug!("Fetching quote of the day from {}", url);
        self.fetch_json(self.http.get(&url).headers(self.headers.clone()))
    }

    /// Fetch up to `max` random quotes tagged with `filter`.
    ///
    /// A new time-seeded generator is created on every call.
    pub fn get_quotes(&self, filter: &str, max: usize) -> Result<Vec<Quote>> {
        self.get_quotes_with(filter, FilterType::Tag, max, &mut time_seeded_rng())
    }

    /// Fetch up to `max` quotes matching `filter` as `kind`, ordered by `rng`.
    ///
    /// A status other than 200 fails with `HttpStatus`, an empty page with
    /// `NoResults`. Otherwise `max` is clamped to
    /// the page size and the leading `max` quotes are returned in a random order.
    pub fn get_quotes_with<R: Rng + ?Sized>(
        &self,
        filter: &str,
        kind: FilterType,
        max: usize,
        rng: &mut R,
    ) -> Result<Vec<Quote>> {
        let url = net::endpoint(&self.base_url, QUOTES_PATH);
        let kind = kind.to_string();
        debug!("Fetching quotes from {} (filter={}, type={})", url, filter, kind);

        let request = self
            .http
            .get(&url)
            .query(&[("filter", filter), ("type", kind.as_str())])
            .headers(self.headers.clone());
        let page: QuotePage = self.fetch_json(request)?;

        if page.quotes.is_empty() {
            return Err(ClientError::NoResults {
                filter: filter.to_string(),
            });
        }
        if !page.last_page {
            debug!("Only page {} is used, more pages are available", page.page);
        }

        Ok(select_quotes(page.quotes, max, rng))
    }

    fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} answered with HTTP {}", response.url(), status);
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .connect_timeout(config.timeout)
        .timeout(config.timeout)
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .cookie_store(true);
    if !config.proxy_from_env {
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}
