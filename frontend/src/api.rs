//! HTTP client for the content API.
//!
//! One [`ApiClient`] is constructed at the application root from the
//! build-time `API_BASE_URL` environment variable and shared with the page
//! components through Yew context. Every request carries credentials so the
//! API can reuse its cookie session.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;
use yew::{Callback, Component, Context};

use common::paths::clean_file_path;

const API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (network, CORS,
    /// deserialization).
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The API answered with a non-success status. `message` is taken from
    /// the structured error payload when one parses, otherwise from the
    /// status text.
    #[error("{message}")]
    Api { status: u16, message: String },
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Reads the base URL captured at build time. Panics at startup when the
    /// variable was not set, misconfigured builds must not ship.
    pub fn from_env() -> ApiClient {
        let base_url = API_BASE_URL.expect("API_BASE_URL must be set when building the frontend");
        ApiClient::new(base_url)
    }

    pub fn new(base_url: &str) -> ApiClient {
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the shared client from Yew context. The provider sits at the
    /// application root, so a missing context is a wiring bug.
    pub fn from_context<C: Component>(ctx: &Context<C>) -> ApiClient {
        ctx.link()
            .context::<ApiClient>(Callback::noop())
            .map(|(api, _handle)| api)
            .expect("ApiClient context not provided")
    }

    /// Absolute, loadable URL for a server-relative media path.
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}/{}", self.base_url, clean_file_path(file_path))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)?
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| response.status_text());
        return Err(ApiError::Api {
            status: response.status(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}
