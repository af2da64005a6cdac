use crate::{
	document::{Document, Selector},
	ids,
};
use html::text;
use laptop_advisor_ui::{select_options, SelectFieldOption};

/// A document held entirely in memory. The cli drives the controller with one and the tests inspect it.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
	elements: Vec<Element>,
	alerts: Vec<String>,
	console: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
	pub tag: &'static str,
	pub id: Option<String>,
	pub classes: Vec<String>,
	pub attributes: Vec<(String, String)>,
	pub value: String,
	pub inner_html: String,
	pub display: Option<String>,
	pub options: Vec<SelectFieldOption>,
}

impl Element {
	pub fn new(tag: &'static str) -> Element {
		Element {
			tag,
			..Element::default()
		}
	}

	pub fn id(mut self, id: &str) -> Element {
		self.id = Some(id.to_owned());
		self
	}

	pub fn class(mut self, class: &str) -> Element {
		if !self.has_class(class) {
			self.classes.push(class.to_owned());
		}
		self
	}

	pub fn attribute(mut self, name: &str, value: &str) -> Element {
		self.attributes.push((name.to_owned(), value.to_owned()));
		self
	}

	pub fn display(mut self, display: &str) -> Element {
		self.display = Some(display.to_owned());
		self
	}

	pub fn option(mut self, option: SelectFieldOption) -> Element {
		if self.options.is_empty() {
			self.value = option.value.clone();
		}
		self.options.push(option);
		self
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	pub fn get_attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	fn set_class(&mut self, class: &str, enabled: bool) {
		if enabled {
			if !self.has_class(class) {
				self.classes.push(class.to_owned());
			}
		} else {
			self.classes.retain(|c| c != class);
		}
	}
}

impl MemoryDocument {
	pub fn new() -> MemoryDocument {
		MemoryDocument::default()
	}

	/// The markup the controller is bound to: both forms, their result areas, and the two tabs with prediction active.
	pub fn laptop_page() -> MemoryDocument {
		let input = |id: &str| Element::new("input").id(id);
		MemoryDocument::new()
			.with_element(
				Element::new("button")
					.class(ids::TAB_BUTTON_CLASS)
					.class(ids::ACTIVE_CLASS)
					.attribute(ids::TAB_NAME_ATTRIBUTE, "predict"),
			)
			.with_element(
				Element::new("button")
					.class(ids::TAB_BUTTON_CLASS)
					.attribute(ids::TAB_NAME_ATTRIBUTE, "recommend"),
			)
			.with_element(
				Element::new("div")
					.id(&ids::tab_panel_id("predict"))
					.class(ids::TAB_PANEL_CLASS)
					.class(ids::ACTIVE_CLASS),
			)
			.with_element(Element::new("form").id(ids::PREDICT_FORM))
			.with_element(Element::new("select").id(ids::PREDICT_BRAND))
			.with_element(Element::new("select").id(ids::PREDICT_OS))
			.with_element(Element::new("select").id(ids::PREDICT_PROCESSOR))
			.with_element(input(ids::PREDICT_RAM))
			.with_element(input(ids::PREDICT_STORAGE))
			.with_element(input(ids::PREDICT_SCREEN))
			.with_element(input(ids::PREDICT_SPECS))
			.with_element(
				Element::new("div")
					.id(ids::PREDICTION_RESULT)
					.display("none"),
			)
			.with_element(Element::new("span").id(ids::PREDICTED_PRICE))
			.with_element(
				Element::new("div")
					.id(&ids::tab_panel_id("recommend"))
					.class(ids::TAB_PANEL_CLASS),
			)
			.with_element(Element::new("form").id(ids::RECOMMEND_FORM))
			.with_element(input(ids::BUDGET))
			.with_element(
				Element::new("select")
					.id(ids::RECOMMEND_BRAND)
					.option(SelectFieldOption::from_value("Any")),
			)
			.with_element(input(ids::MIN_RAM))
			.with_element(input(ids::MIN_STORAGE))
			.with_element(Element::new("div").id(ids::RECOMMENDATIONS_RESULT))
	}

	pub fn with_element(mut self, element: Element) -> MemoryDocument {
		self.elements.push(element);
		self
	}

	pub fn element(&self, id: &str) -> Option<&Element> {
		self.elements
			.iter()
			.find(|element| element.id.as_deref() == Some(id))
	}

	fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
		self.elements
			.iter_mut()
			.find(|element| element.id.as_deref() == Some(id))
	}

	/// Type into a field. Returns false if there is no such field.
	pub fn set_field_value(&mut self, id: &str, value: &str) -> bool {
		match self.element_mut(id) {
			Some(element) => {
				element.value = value.to_owned();
				true
			}
			None => false,
		}
	}

	/// The element's markup, including any options appended to a select.
	pub fn inner_html(&self, id: &str) -> Option<String> {
		self.element(id).map(|element| {
			format!(
				"{}{}",
				element.inner_html,
				select_options(&element.options)
			)
		})
	}

	pub fn option_values(&self, id: &str) -> Vec<&str> {
		self.element(id)
			.map(|element| {
				element
					.options
					.iter()
					.map(|option| option.value.as_str())
					.collect()
			})
			.unwrap_or_default()
	}

	pub fn is_displayed(&self, id: &str) -> bool {
		self.element(id)
			.map(|element| element.display.as_deref() != Some("none"))
			.unwrap_or(false)
	}

	/// Every element carrying `class`, in document order.
	pub fn elements_with_class<'a>(
		&'a self,
		class: &'a str,
	) -> impl Iterator<Item = &'a Element> + 'a {
		self.elements
			.iter()
			.filter(move |element| element.has_class(class))
	}

	pub fn alerts(&self) -> &[String] {
		&self.alerts
	}

	pub fn console(&self) -> &[String] {
		&self.console
	}
}

impl Document for MemoryDocument {
	fn field_value(&self, id: &str) -> Option<String> {
		self.element(id).map(|element| element.value.clone())
	}

	fn append_option(&mut self, select_id: &str, option: &SelectFieldOption) -> bool {
		match self.element_mut(select_id) {
			Some(element) => {
				*element = std::mem::take(element).option(option.clone());
				true
			}
			None => false,
		}
	}

	fn set_text_content(&mut self, id: &str, text: &str) -> bool {
		match self.element_mut(id) {
			Some(element) => {
				element.options.clear();
				element.inner_html = text!(text.to_owned()).render_to_string();
				true
			}
			None => false,
		}
	}

	fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
		match self.element_mut(id) {
			Some(element) => {
				element.options.clear();
				element.inner_html = html.to_owned();
				true
			}
			None => false,
		}
	}

	fn set_display(&mut self, id: &str, display: &str) -> bool {
		match self.element_mut(id) {
			Some(element) => {
				element.display = Some(display.to_owned());
				true
			}
			None => false,
		}
	}

	fn set_class(&mut self, selector: Selector<'_>, class: &str, enabled: bool) -> usize {
		let matching: Vec<&mut Element> = match selector {
			Selector::Id(id) => self.element_mut(id).into_iter().collect(),
			Selector::Class(selector_class) => self
				.elements
				.iter_mut()
				.filter(|element| element.has_class(selector_class))
				.collect(),
			Selector::NthOfClass(selector_class, index) => self
				.elements
				.iter_mut()
				.filter(|element| element.has_class(selector_class))
				.nth(index)
				.into_iter()
				.collect(),
		};
		let count = matching.len();
		for element in matching {
			element.set_class(class, enabled);
		}
		count
	}

	fn alert(&mut self, message: &str) {
		self.alerts.push(message.to_owned());
	}

	fn log_error(&mut self, message: &str) {
		self.console.push(message.to_owned());
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_select_keeps_static_entries() {
		let mut document = MemoryDocument::laptop_page();
		let option = SelectFieldOption::from_value("Dell");
		assert!(document.append_option(ids::RECOMMEND_BRAND, &option));
		assert_eq!(document.option_values(ids::RECOMMEND_BRAND), vec!["Any", "Dell"]);
		assert_eq!(document.field_value(ids::RECOMMEND_BRAND).as_deref(), Some("Any"));
		assert_eq!(
			document.inner_html(ids::RECOMMEND_BRAND).unwrap(),
			r#"<option value="Any">Any</option><option value="Dell">Dell</option>"#
		);
	}

	#[test]
	fn test_missing_elements() {
		let mut document = MemoryDocument::new();
		assert_eq!(document.field_value("budget"), None);
		assert!(!document.set_inner_html("budget", "<p></p>"));
		assert!(!document.set_display("budget", "block"));
		assert_eq!(document.set_class(Selector::Class("tab-btn"), "active", true), 0);
	}

	#[test]
	fn test_set_class() {
		let mut document = MemoryDocument::laptop_page();
		let count = document.set_class(
			Selector::Class(ids::TAB_BUTTON_CLASS),
			ids::ACTIVE_CLASS,
			false,
		);
		assert_eq!(count, 2);
		assert_eq!(document.elements_with_class(ids::ACTIVE_CLASS).count(), 1);
		document.set_class(Selector::NthOfClass(ids::TAB_BUTTON_CLASS, 1), ids::ACTIVE_CLASS, true);
		let active_button = document
			.elements_with_class(ids::TAB_BUTTON_CLASS)
			.find(|element| element.has_class(ids::ACTIVE_CLASS))
			.unwrap();
		assert_eq!(active_button.get_attribute(ids::TAB_NAME_ATTRIBUTE), Some("recommend"));
	}

	#[test]
	fn test_text_content_is_escaped() {
		let mut document = MemoryDocument::laptop_page();
		document.set_text_content(ids::PREDICTED_PRICE, "<1,000>");
		assert_eq!(document.inner_html(ids::PREDICTED_PRICE).unwrap(), "&lt;1,000&gt;");
	}
}
