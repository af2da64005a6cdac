use html::{HostNode, Node};
use std::borrow::Cow;

/// The kind of message shown in place of a results area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
	/// Pending work, and results that came back empty.
	Loading,
	Error,
}

pub fn status_message(level: Level, message: impl Into<Cow<'static, str>>) -> Node {
	let class = match level {
		Level::Loading => "loading",
		Level::Error => "error",
	};
	let message: Cow<'static, str> = message.into();
	HostNode::new("div")
		.attribute("class", class)
		.child(Node::from(message.into_owned()))
		.into()
}

#[test]
fn test_status_message() {
	assert_eq!(
		status_message(Level::Loading, "Working...").render_to_string(),
		r#"<div class="loading">Working...</div>"#
	);
	assert_eq!(
		status_message(Level::Error, format!("Error: {}", "<bad>")).render_to_string(),
		r#"<div class="error">Error: &lt;bad&gt;</div>"#
	);
}
