//! HTTP [`Backend`] implementation.

use std::{str::FromStr, time::Duration};

use common::operations::{By, Select, Update};
use reqwest::{Client, Response};
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{board::StatusUpdate, Deal},
    infra::backend::{self, payload, Backend},
};

pub use reqwest::Url;

/// Error of parsing a [`Url`].
pub type UrlParseError = <Url as FromStr>::Err;

/// Default base URL of the deals REST API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081/api/";

/// [`Http`] client configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the deals REST API.
    #[default(Url::parse(DEFAULT_BASE_URL).expect("valid URL"))]
    pub base_url: Url,

    /// Timeout of a single request.
    #[default(Duration::from_secs(10))]
    pub timeout: Duration,
}

/// Deals REST API client.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP [`Client`].
    client: Client,

    /// Base URL of the deals REST API.
    base_url: Url,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to create a new HTTP [`Client`].
    pub fn new(conf: &Config) -> Result<Self, Traced<backend::Error>> {
        let client = Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> backend::Error))?;
        Ok(Self {
            client,
            base_url: conf.base_url.clone(),
        })
    }

    /// Builds an endpoint [`Url`] out of the provided path `segments`.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            _ = path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Backend<Select<By<Vec<Deal>, ()>>> for Http {
    type Ok = Vec<Deal>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Deal>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let url = self.endpoint(&["deals"]);
        log::debug!("fetching `Deal`s from `{url}`");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> backend::Error))?;
        ensure_success(resp)
            .await?
            .json::<payload::List>()
            .await
            .map(payload::List::normalize)
            .map_err(tracerr::from_and_wrap!(=> backend::Error))
    }
}

impl Backend<Update<StatusUpdate>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update(update): Update<StatusUpdate>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = update.deal.id.to_string();
        let url = self.endpoint(&["deals", &id, "status"]);
        let body = payload::StatusPatch {
            status: update.status.key(),
            reason: update.reason.map(|r| r.to_string()),
        };
        log::debug!("updating `Deal(id: {id})` status at `{url}`");

        let resp = self
            .client
            .patch(url)
            .json(&body)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> backend::Error))?;
        ensure_success(resp).await.map(drop)
    }
}

/// Ensures the provided [`Response`] has a success status.
async fn ensure_success(
    resp: Response,
) -> Result<Response, Traced<backend::Error>> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(tracerr::new!(backend::Error::UnexpectedStatus {
        status: status.as_u16(),
        body,
    }))
}
