//! Minimal client for the Imgur v3 REST API.
//!
//! Requests are authenticated with the application's client id. Every call
//! returns the decoded body together with the [`Rate`] snapshot parsed from
//! the `X-RateLimit-*` response headers, so the client itself holds no
//! mutable state and can be shared freely between requests.

use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, USER_AGENT};
use reqwest::{Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod gallery;
pub mod image;

pub use gallery::{GalleryResult, GalleryService};
pub use image::{Image, ImageService};

pub const DEFAULT_BASE_URL: &str = "https://api.imgur.com/3/";
pub const DEFAULT_USER_AGENT: &str = concat!("imgurappist/", env!("CARGO_PKG_VERSION"));

const HDR_USER_RATE_LIMIT: &str = "x-ratelimit-userlimit";
const HDR_USER_RATE_REMAINING: &str = "x-ratelimit-userremaining";
const HDR_USER_RATE_RESET: &str = "x-ratelimit-userreset";
const HDR_CLIENT_RATE_LIMIT: &str = "x-ratelimit-clientlimit";
const HDR_CLIENT_RATE_REMAINING: &str = "x-ratelimit-clientremaining";

#[derive(Debug, Error)]
pub enum ImgurError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request to imgur failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("err code {status} for request '{request}': {message}")]
    Api {
        status: u16,
        request: String,
        method: String,
        message: String,
    },

    #[error("failed to decode imgur response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} must be provided")]
    MissingParameter(&'static str),
}

/// Remaining API quota as reported by the most recent response.
/// Any counter the server did not send is left as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rate {
    /// Requests per hour the user is limited to.
    pub user_limit: Option<u32>,
    /// Requests the user has left this hour.
    pub user_remaining: Option<u32>,
    /// When the user credits reset.
    pub user_reset: Option<DateTime<Utc>>,
    /// Requests per month the application is allowed.
    pub client_limit: Option<u32>,
    /// Requests the application has left this month.
    pub client_remaining: Option<u32>,
}

impl Rate {
    pub fn from_headers(headers: &HeaderMap) -> Rate {
        Rate {
            user_limit: header_value(headers, HDR_USER_RATE_LIMIT),
            user_remaining: header_value(headers, HDR_USER_RATE_REMAINING),
            user_reset: header_value::<i64>(headers, HDR_USER_RATE_RESET).and_then(unix_time),
            client_limit: header_value(headers, HDR_CLIENT_RATE_LIMIT),
            client_remaining: header_value(headers, HDR_CLIENT_RATE_REMAINING),
        }
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn unix_time(secs: i64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    Utc.timestamp_opt(secs, 0).single()
}

/// The `{status, success, data}` wrapper every Imgur endpoint responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub success: bool,
}

/// A decoded response body plus the metadata that came with it.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub rate: Rate,
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            rate: self.rate,
            body: f(self.body),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    data: ErrorData,
    #[serde(default)]
    status: u16,
}

#[derive(Debug, Deserialize)]
struct ErrorData {
    #[serde(default)]
    error: serde_json::Value,
    #[serde(default)]
    request: String,
    #[serde(default)]
    method: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    user_agent: String,
    authorization: String,
    client_secret: String,
}

impl Client {
    /// Creates a client bound to [`DEFAULT_BASE_URL`]. When no `http` client is
    /// supplied a default `reqwest::Client` is used.
    pub fn new(http: Option<reqwest::Client>, client_id: &str, client_secret: &str) -> Client {
        Client {
            http: http.unwrap_or_default(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            authorization: format!("Client-ID {client_id}"),
            client_secret: client_secret.to_string(),
        }
    }

    /// Points the client at a different API root. Relative request paths are
    /// resolved against it, so a trailing slash is added when missing.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Client, ImgurError> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.base_url = Url::parse(&base)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn gallery(&self) -> GalleryService<'_> {
        GalleryService::new(self)
    }

    pub fn image(&self) -> ImageService<'_> {
        ImageService::new(self)
    }

    /// Builds a request for `path` relative to the base url. Paths should not
    /// start with a slash. When `body` is given it is sent as JSON.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, ImgurError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(USER_AGENT, &self.user_agent)
            .header(AUTHORIZATION, &self.authorization);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }

    pub fn get(&self, path: &str) -> Result<Request, ImgurError> {
        self.new_request::<()>(Method::GET, path, None)
    }

    /// Sends `request` and decodes the JSON body into `T`.
    ///
    /// Non-2xx responses are turned into [`ImgurError::Api`] using the error
    /// payload Imgur sends back; if that payload can't be decoded the raw body
    /// is used as the message.
    pub async fn execute<T>(&self, request: Request) -> Result<ApiResponse<T>, ImgurError>
    where
        T: DeserializeOwned,
    {
        let method = request.method().to_string();
        let path = request.url().path().to_string();
        log::debug!("imgur request: {method} {path}");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let rate = Rate::from_headers(response.headers());
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status, method, path, &bytes));
        }

        let body = serde_json::from_slice(&bytes)?;
        Ok(ApiResponse { status, rate, body })
    }

    /// Asks the `credits` endpoint for the current quota.
    pub async fn rate_limit(&self) -> Result<ApiResponse<Rate>, ImgurError> {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Credits {
            user_limit: Option<u32>,
            user_remaining: Option<u32>,
            user_reset: Option<i64>,
            client_limit: Option<u32>,
            client_remaining: Option<u32>,
        }

        let request = self.get("credits")?;
        let response = self.execute::<Envelope<Credits>>(request).await?;
        Ok(response.map(|envelope| {
            let credits = envelope.data;
            Rate {
                user_limit: credits.user_limit,
                user_remaining: credits.user_remaining,
                user_reset: credits.user_reset.and_then(unix_time),
                client_limit: credits.client_limit,
                client_remaining: credits.client_remaining,
            }
        }))
    }
}

fn api_error(status: StatusCode, method: String, path: String, body: &[u8]) -> ImgurError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(decoded) => {
            let message = match decoded.data.error {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => status.canonical_reason().unwrap_or_default().to_string(),
                other => other.to_string(),
            };
            ImgurError::Api {
                status: if decoded.status != 0 {
                    decoded.status
                } else {
                    status.as_u16()
                },
                request: if decoded.data.request.is_empty() {
                    path
                } else {
                    decoded.data.request
                },
                method: if decoded.data.method.is_empty() {
                    method
                } else {
                    decoded.data.method
                },
                message,
            }
        }
        Err(_) => ImgurError::Api {
            status: status.as_u16(),
            request: path,
            method,
            message: String::from_utf8_lossy(body).trim().to_string(),
        },
    }
}
