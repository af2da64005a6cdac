use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Clone, Debug, From)]
pub enum Node {
	EscapedText(EscapedTextNode),
	Host(HostNode),
	Vec(Vec<Node>),
}

#[derive(Clone, Debug)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, Debug, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

impl Node {
	pub fn render_to_string(self) -> String {
		self.to_string()
	}
}

impl HostNode {
	pub fn new(name: &'static str) -> HostNode {
		HostNode {
			name,
			attributes: Vec::new(),
			children: Vec::new(),
			self_closing: false,
		}
	}

	/// Create an element that is written as `<name ... />` and never has children.
	pub fn void(name: &'static str) -> HostNode {
		HostNode {
			self_closing: true,
			..HostNode::new(name)
		}
	}

	pub fn attribute(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> HostNode {
		self.attributes.push((key, value.into()));
		self
	}

	pub fn child(mut self, child: impl Into<Node>) -> HostNode {
		self.children.push(child.into());
		self
	}

	pub fn children<I, T>(mut self, children: I) -> HostNode
	where
		I: IntoIterator<Item = T>,
		T: Into<Node>,
	{
		self.children
			.extend(children.into_iter().map(|child| child.into()));
		self
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::EscapedText(node) => {
				write!(f, "{}", node)?;
			}
			Node::Host(node) => {
				write!(f, "{}", node)?;
			}
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
			}
		};
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						escape_attribute(f, value)?;
						write!(f, "\"")?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " /")?;
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for c in self.0.chars() {
			match c {
				'>' => write!(f, "&gt;")?,
				'<' => write!(f, "&lt;")?,
				'"' => write!(f, "&quot;")?,
				'&' => write!(f, "&amp;")?,
				'\'' => write!(f, "&apos;")?,
				c => f.write_char(c)?,
			};
		}
		Ok(())
	}
}

// Attribute values are always double quoted, so single quotes may pass through. Inline handlers like `onerror` rely on this.
fn escape_attribute(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		$crate::Node::EscapedText($crate::EscapedTextNode($t.into()))
	};
}

#[test]
fn test_host_node() {
	let node: Node = HostNode::new("div")
		.attribute("class", "card")
		.attribute("hidden", false)
		.child("Hello World")
		.into();
	assert_eq!(node.render_to_string(), r#"<div class="card">Hello World</div>"#);
}

#[test]
fn test_void_node() {
	let node: Node = HostNode::void("img")
		.attribute("src", "a.png")
		.attribute("alt", None::<String>)
		.into();
	assert_eq!(node.render_to_string(), r#"<img src="a.png" />"#);
}

#[test]
fn test_escaping() {
	let node: Node = HostNode::new("span")
		.attribute("title", "\"quoted\" & 'single'")
		.child("<b>Tom & Jerry's</b>".to_owned())
		.into();
	assert_eq!(
		node.render_to_string(),
		r#"<span title="&quot;quoted&quot; &amp; 'single'">&lt;b&gt;Tom &amp; Jerry&apos;s&lt;/b&gt;</span>"#
	);
}

#[test]
fn test_vec_and_text() {
	let node: Node = vec![text!("a<b"), HostNode::void("br").into()].into();
	assert_eq!(node.render_to_string(), "a&lt;b<br />");
}
