use jeopardy_core::{CluesApi, FetchError, FetchResult};
use jeopardy_protocol::{self as protocol, CategoryDetail, CategoryId, CategorySummary};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// [`CluesApi`] over the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpCluesApi {
    base_url: String,
}

impl HttpCluesApi {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.url(path);
        log::trace!("GET {}", url);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;
        let response = JsFuture::from(gloo::utils::window().fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not resolve to a Response".to_string()))?;

        check_status(response.status(), &url)?;

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?
            .as_string();

        decode_body(body)
    }
}

/// Anything outside `200..=299` is a network failure, matching `Response::ok`.
fn check_status(status: u16, url: &str) -> FetchResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Network(format!("HTTP {} from {}", status, url)))
    }
}

fn decode_body<T: DeserializeOwned>(body: Option<String>) -> FetchResult<T> {
    let body = body.ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;
    protocol::from_json(&body).map_err(|err| FetchError::Decode(err.to_string()))
}

impl CluesApi for HttpCluesApi {
    async fn categories(&self, count: usize) -> FetchResult<Vec<CategorySummary>> {
        self.get(&protocol::categories_path(count)).await
    }

    async fn category(&self, id: CategoryId) -> FetchResult<CategoryDetail> {
        self.get(&protocol::category_path(id)).await
    }
}

fn network_error(err: JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", err))
}
