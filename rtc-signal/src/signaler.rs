use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Client, Method, Request, Uri};
use log::{debug, trace};

use crate::message::{AnswerResponse, OfferRequest};
use shared::error::{Error, Result};

/// Delivers a local offer to the remote endpoint and returns its answer in a
/// single request/response exchange.
#[allow(async_fn_in_trait)]
pub trait Signaler {
    async fn exchange(&self, offer: &OfferRequest) -> Result<AnswerResponse>;
}

/// Signaler POSTing the offer as JSON to an HTTP endpoint such as
/// `http://127.0.0.1:8080/offer`.
#[derive(Debug, Clone)]
pub struct HttpSignaler {
    client: Client<HttpConnector>,
    endpoint: Uri,
}

impl HttpSignaler {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint: Uri = endpoint
            .parse()
            .map_err(|err: hyper::http::uri::InvalidUri| {
                Error::ErrSignalingEndpoint(format!("{endpoint}: {err}"))
            })?;
        if endpoint.scheme_str() != Some("http") {
            return Err(Error::ErrSignalingEndpoint(format!(
                "{endpoint}: only http endpoints are supported"
            )));
        }

        Ok(HttpSignaler {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }
}

impl Signaler for HttpSignaler {
    async fn exchange(&self, offer: &OfferRequest) -> Result<AnswerResponse> {
        let body = serde_json::to_string(offer).map_err(Error::from_std)?;
        let req = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(Error::from_std)?;

        debug!("sending {} to {}", offer.description.sdp_type, self.endpoint);
        let resp = self.client.request(req).await.map_err(Error::from_std)?;
        let status = resp.status();
        let body = hyper::body::to_bytes(resp.into_body())
            .await
            .map_err(Error::from_std)?;
        trace!("{} replied {} with {} bytes", self.endpoint, status, body.len());

        if !status.is_success() {
            return Err(Error::ErrSignalingStatus(status.as_u16()));
        }

        serde_json::from_slice::<AnswerResponse>(&body).map_err(Error::from_std)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_http_signaler() {
        let signaler = HttpSignaler::new("http://127.0.0.1:8080/offer").unwrap();
        assert_eq!(signaler.endpoint().path(), "/offer");

        let tests = vec!["", "not a uri", "https://example.com/offer", "/offer"];
        for endpoint in tests {
            assert!(
                matches!(
                    HttpSignaler::new(endpoint),
                    Err(Error::ErrSignalingEndpoint(_))
                ),
                "{endpoint:?} should be rejected"
            );
        }
    }
}
