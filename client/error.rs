use derive_more::{Display, From};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between reading a form and writing its result.
#[derive(Debug, Display, From)]
pub enum Error {
	/// The request could not be sent, or its body was not the expected json.
	#[display(fmt = "{}", _0)]
	Http(reqwest::Error),
	#[display(fmt = "{}", _0)]
	Json(serde_json::Error),
	#[display(fmt = "{}", _0)]
	Url(url::ParseError),
	/// The server reported success but left out the payload.
	#[display(fmt = "{}", _0)]
	#[from(ignore)]
	MalformedResponse(String),
	/// The server answered with `success: false`.
	#[display(fmt = "{}", _0)]
	#[from(ignore)]
	Application(String),
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Http(error) => Some(error),
			Error::Json(error) => Some(error),
			Error::Url(error) => Some(error),
			Error::MalformedResponse(_) | Error::Application(_) => None,
		}
	}
}

impl Error {
	/// Application errors carry the server's own message. Everything else is a transport or parse failure.
	pub fn is_application(&self) -> bool {
		matches!(self, Error::Application(_))
	}
}

#[test]
fn test_display() {
	assert_eq!(
		Error::Application("bad input".to_owned()).to_string(),
		"bad input"
	);
	let error: Error = serde_json::from_str::<serde_json::Value>("{")
		.unwrap_err()
		.into();
	assert!(!error.is_application());
	assert!(std::error::Error::source(&error).is_some());
	let error = Error::Application("bad input".to_owned());
	assert!(error.is_application());
	assert!(std::error::Error::source(&error).is_none());
}
