//! Family-tree fetches against the StrainTree REST API.

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::components::family_tree::{FamilyTree, FamilyTreeEnvelope};
use crate::config::ApiConfig;

/// Failure to obtain a family tree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
	/// Not running in a browser window.
	#[error("no browser window available")]
	NoWindow,
	/// The request never produced a response.
	#[error("request failed: {0}")]
	Network(String),
	/// Non-2xx response.
	#[error("server responded with status {0}")]
	Status(u16),
	/// The body was not a family tree.
	#[error("malformed response: {0}")]
	Decode(String),
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		ApiError::Decode(err.to_string())
	}
}

fn js_error(err: JsValue) -> ApiError {
	ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Fetches the tree with `id`, sending session cookies along.
pub async fn fetch_family_tree(config: &ApiConfig, id: &str) -> Result<FamilyTree, ApiError> {
	let url = config.family_tree_url(id);
	info!("fetching family tree {id} from {url}");
	let result = get_text(&url).await.and_then(|body| parse_family_tree(&body));
	if let Err(err) = &result {
		warn!("family tree {id}: {err}");
	}
	result
}

/// Decodes a `{"family_tree": {...}}` response body.
pub fn parse_family_tree(body: &str) -> Result<FamilyTree, ApiError> {
	let envelope: FamilyTreeEnvelope = serde_json::from_str(body)?;
	Ok(envelope.family_tree)
}

async fn get_text(url: &str) -> Result<String, ApiError> {
	let window = web_sys::window().ok_or(ApiError::NoWindow)?;
	let init = RequestInit::new();
	init.set_method("GET");
	init.set_credentials(RequestCredentials::Include);
	let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;

	let promise: js_sys::Promise = window.fetch_with_request(&request);
	let response: Response = JsFuture::from(promise)
		.await
		.map_err(js_error)?
		.dyn_into()
		.map_err(js_error)?;
	if !response.ok() {
		return Err(ApiError::Status(response.status()));
	}

	let text = JsFuture::from(response.text().map_err(js_error)?)
		.await
		.map_err(js_error)?;
	text.as_string()
		.ok_or_else(|| ApiError::Decode("response body is not text".to_owned()))
}
