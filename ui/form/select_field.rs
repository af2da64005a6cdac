use html::{HostNode, Node};

#[derive(Clone, Debug, PartialEq)]
pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

impl SelectFieldOption {
	/// An option whose label is its value, which is how server provided choices are shown.
	pub fn from_value(value: impl Into<String>) -> SelectFieldOption {
		let value = value.into();
		SelectFieldOption {
			text: value.clone(),
			value,
		}
	}
}

pub fn select_option(option: &SelectFieldOption) -> Node {
	HostNode::new("option")
		.attribute("value", option.value.clone())
		.child(option.text.clone())
		.into()
}

pub fn select_options<'a>(options: impl IntoIterator<Item = &'a SelectFieldOption>) -> Node {
	Node::Vec(options.into_iter().map(select_option).collect())
}

#[test]
fn test_select_options() {
	let options = vec![
		SelectFieldOption {
			text: "Any".to_owned(),
			value: "Any".to_owned(),
		},
		SelectFieldOption::from_value("HP & Co"),
	];
	assert_eq!(
		select_options(&options).render_to_string(),
		r#"<option value="Any">Any</option><option value="HP &amp; Co">HP &amp; Co</option>"#
	);
}
