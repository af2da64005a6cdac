use crate::{
	config::Config,
	error::Result,
	types::{
		OptionsPayload, PredictionRequest, PredictionResponse, RecommendationRequest,
		RecommendationResponse,
	},
};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// The server behind the page. Futures are not `Send` because everything runs on the ui thread.
pub trait Backend {
	fn options(&self) -> LocalBoxFuture<'_, Result<OptionsPayload>>;
	fn predict(&self, request: PredictionRequest) -> LocalBoxFuture<'_, Result<PredictionResponse>>;
	fn recommend(
		&self,
		request: RecommendationRequest,
	) -> LocalBoxFuture<'_, Result<RecommendationResponse>>;
}

/// Talks to the server over json http. The response status is ignored and only the body is read.
pub struct HttpBackend {
	client: reqwest::Client,
	options_url: Url,
	predict_url: Url,
	recommend_url: Url,
}

impl HttpBackend {
	pub fn new(base_url: &Url, config: &Config) -> Result<HttpBackend> {
		Ok(HttpBackend {
			client: reqwest::Client::new(),
			options_url: base_url.join(config.options_path())?,
			predict_url: base_url.join(config.predict_path())?,
			recommend_url: base_url.join(config.recommend_path())?,
		})
	}

	pub fn options_url(&self) -> &Url {
		&self.options_url
	}

	pub fn predict_url(&self) -> &Url {
		&self.predict_url
	}

	pub fn recommend_url(&self) -> &Url {
		&self.recommend_url
	}
}

impl HttpBackend {
	async fn get_json<T>(&self, url: &Url) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = self.client.get(url.clone()).send().await?;
		Ok(response.json::<T>().await?)
	}

	async fn post_json<T, R>(&self, url: &Url, body: R) -> Result<T>
	where
		T: DeserializeOwned,
		R: Serialize,
	{
		let response = self.client.post(url.clone()).json(&body).send().await?;
		Ok(response.json::<T>().await?)
	}
}

impl Backend for HttpBackend {
	fn options(&self) -> LocalBoxFuture<'_, Result<OptionsPayload>> {
		self.get_json(&self.options_url).boxed_local()
	}

	fn predict(
		&self,
		request: PredictionRequest,
	) -> LocalBoxFuture<'_, Result<PredictionResponse>> {
		self.post_json(&self.predict_url, request).boxed_local()
	}

	fn recommend(
		&self,
		request: RecommendationRequest,
	) -> LocalBoxFuture<'_, Result<RecommendationResponse>> {
		self.post_json(&self.recommend_url, request).boxed_local()
	}
}

#[test]
fn test_endpoint_urls() {
	let base_url = Url::parse("http://127.0.0.1:5000").unwrap();
	let backend = HttpBackend::new(&base_url, &Config::default()).unwrap();
	assert_eq!(backend.options_url().as_str(), "http://127.0.0.1:5000/api/options");
	assert_eq!(backend.predict_url().as_str(), "http://127.0.0.1:5000/predict");
	assert_eq!(backend.recommend_url().as_str(), "http://127.0.0.1:5000/recommend");
	let config = Config {
		predict_path: Some("/v2/predict".to_owned()),
		..Config::default()
	};
	let backend = HttpBackend::new(&base_url, &config).unwrap();
	assert_eq!(backend.predict_url().as_str(), "http://127.0.0.1:5000/v2/predict");
}
