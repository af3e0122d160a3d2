use std::{future::Future, time::Duration};

use reqwest::Proxy;
use thiserror::Error;

// we use separate error types for construction and request

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("ProxyError: {0} from scheme: {1}.")]
    ProxyError(reqwest::Error, String),
    #[error("BuildError: {0}.")]
    BuildError(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to retrive response from {url}: {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {0} timed out")]
    Timeout(String),
}

impl TransportError {
    fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout(url.to_string())
        } else {
            Self::ConnectionError {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// A single GET round trip.
///
/// The body is returned as text whatever the status code is, callers
/// decide what the content means. No retry happens at this layer.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    // dotabuff refuses requests without a browser looking agent
    const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0 Safari/537.36";

    pub fn new(timeout: Duration, proxy: Option<&str>) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)));
        let builder = match proxy {
            Some(proxy) => {
                let proxy = Proxy::all(proxy)
                    .map_err(|err| ClientError::ProxyError(err, proxy.to_string()))?;
                builder.proxy(proxy)
            }
            None => builder,
        };
        let client = builder.build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<String, TransportError> {
        let req = self.client.get(url).query(params);
        let resp = req
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(url, err))?;
        log::debug!("GET {} -> {}", url, resp.status());
        resp.text()
            .await
            .map_err(|err| TransportError::from_reqwest(url, err))
    }
}
