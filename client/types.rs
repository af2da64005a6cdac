use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The choices offered by the brand, operating system, and processor selects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsPayload {
	pub brands: Vec<String>,
	pub os: Vec<String>,
	pub processors: Vec<String>,
}

/// The body of `POST /predict`. Values are sent exactly as they were entered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
	pub brand: String,
	pub os: String,
	pub processor: String,
	pub ram: String,
	pub storage: String,
	pub screen_size: String,
	pub specs_score: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
	#[serde(default)]
	pub success: bool,
	pub predicted_price: Option<f64>,
	pub error: Option<String>,
}

impl PredictionResponse {
	pub fn into_result(self) -> Result<f64> {
		if !self.success {
			return Err(application_error(self.error));
		}
		self.predicted_price.ok_or_else(|| {
			Error::MalformedResponse("the response is missing predicted_price".to_owned())
		})
	}
}

/// The body of `POST /recommend`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
	pub budget: String,
	pub brand: String,
	pub min_ram: String,
	pub min_storage: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
	#[serde(default)]
	pub success: bool,
	pub recommendations: Option<Vec<Laptop>>,
	pub error: Option<String>,
}

impl RecommendationResponse {
	pub fn into_result(self) -> Result<Vec<Laptop>> {
		if !self.success {
			return Err(application_error(self.error));
		}
		self.recommendations.ok_or_else(|| {
			Error::MalformedResponse("the response is missing recommendations".to_owned())
		})
	}
}

fn application_error(error: Option<String>) -> Error {
	Error::Application(error.unwrap_or_else(|| "unknown error".to_owned()))
}

/// A recommended laptop. Apart from the price, every field is shown exactly as the server sent it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Laptop {
	#[serde(default)]
	pub name: Scalar,
	pub price: f64,
	#[serde(default)]
	pub brand: Scalar,
	#[serde(default)]
	pub processor: Scalar,
	#[serde(default)]
	pub ram: Scalar,
	#[serde(default)]
	pub storage: Scalar,
	#[serde(default)]
	pub graphics: Scalar,
	#[serde(default)]
	pub screen_size: Scalar,
	#[serde(default)]
	pub ratings: Scalar,
	#[serde(default)]
	pub image_url: Scalar,
}

/// A JSON scalar displayed without any transformation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Text(String),
	Number(f64),
	Bool(bool),
	Null,
}

impl Default for Scalar {
	fn default() -> Scalar {
		Scalar::Null
	}
}

impl std::fmt::Display for Scalar {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Scalar::Text(value) => write!(f, "{}", value),
			Scalar::Number(value) => write!(f, "{}", value),
			Scalar::Bool(value) => write!(f, "{}", value),
			Scalar::Null => Ok(()),
		}
	}
}

impl From<&str> for Scalar {
	fn from(value: &str) -> Scalar {
		Scalar::Text(value.to_owned())
	}
}

impl From<f64> for Scalar {
	fn from(value: f64) -> Scalar {
		Scalar::Number(value)
	}
}

#[test]
fn test_prediction_response() {
	let response: PredictionResponse =
		serde_json::from_str(r#"{"success": true, "predicted_price": 55000.5}"#).unwrap();
	assert_eq!(response.into_result().unwrap(), 55000.5);
	let response: PredictionResponse =
		serde_json::from_str(r#"{"success": false, "error": "bad input"}"#).unwrap();
	match response.into_result() {
		Err(Error::Application(message)) => assert_eq!(message, "bad input"),
		_ => panic!("expected an application error"),
	}
	let response: PredictionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
	assert!(matches!(
		response.into_result(),
		Err(Error::MalformedResponse(_))
	));
	let response: PredictionResponse = serde_json::from_str(r#"{}"#).unwrap();
	match response.into_result() {
		Err(Error::Application(message)) => assert_eq!(message, "unknown error"),
		_ => panic!("expected an application error"),
	}
}

#[test]
fn test_prediction_request_serializes_strings_verbatim() {
	let request = PredictionRequest {
		brand: "HP".to_owned(),
		os: "Windows 11".to_owned(),
		processor: "Intel Core i5".to_owned(),
		ram: "eight".to_owned(),
		storage: "512".to_owned(),
		screen_size: "15.6".to_owned(),
		specs_score: "".to_owned(),
	};
	let value = serde_json::to_value(&request).unwrap();
	assert_eq!(
		value,
		serde_json::json!({
			"brand": "HP",
			"os": "Windows 11",
			"processor": "Intel Core i5",
			"ram": "eight",
			"storage": "512",
			"screen_size": "15.6",
			"specs_score": "",
		})
	);
}

#[test]
fn test_laptop_scalars() {
	let laptops: RecommendationResponse = serde_json::from_str(
		r#"{
			"success": true,
			"recommendations": [{
				"name": "Vivobook 15",
				"price": 38990,
				"brand": "Asus",
				"processor": "Intel Core i3",
				"ram": "8 GB",
				"storage": "512 GB SSD",
				"graphics": "Intel UHD",
				"screen_size": "15.6 inches",
				"ratings": 4.2,
				"image_url": null
			}]
		}"#,
	)
	.unwrap();
	let laptops = laptops.into_result().unwrap();
	assert_eq!(laptops.len(), 1);
	assert_eq!(laptops[0].ratings.to_string(), "4.2");
	assert_eq!(laptops[0].image_url.to_string(), "");
	assert_eq!(laptops[0].brand, Scalar::from("Asus"));
	assert_eq!(Scalar::from(4.0).to_string(), "4");
}
