//! JSON-over-HTTP delivery shared by the webhook notifiers.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::error::DeliveryError;

/// Longest response body kept in a delivery error.
const MAX_ERROR_BODY: usize = 512;

/// POSTs JSON bodies to a single fixed URL.
#[derive(Clone)]
pub(crate) struct Webhook {
    client: Client,
    url: Url,
}

/// Path and query of a webhook URL carry its credentials; only the origin
/// is printed.
impl fmt::Debug for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("origin", &self.url.origin().ascii_serialization())
            .finish_non_exhaustive()
    }
}

impl Webhook {
    /// Build a webhook for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Destination`] if the URL does not parse or is
    /// not http(s), and [`DeliveryError::Http`] if the client cannot be built.
    pub(crate) fn new(url: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let url = Url::parse(url).map_err(|e| DeliveryError::Destination(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeliveryError::Destination(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub(crate) fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// POST `body` once. Any non-2xx status is an error.
    pub(crate) async fn post<T: Serialize + ?Sized>(&self, body: &T) -> Result<(), DeliveryError> {
        let payload = serde_json::to_vec(body)?;
        let response = self
            .client
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Err(DeliveryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
