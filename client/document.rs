use laptop_advisor_ui::SelectFieldOption;

/// Which elements a class change applies to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selector<'a> {
	Id(&'a str),
	/// Every element with the class, in document order.
	Class(&'a str),
	/// The element at this position among those with the class.
	NthOfClass(&'a str, usize),
}

/// The page the controller reads from and writes to. It is the only mutable state the controller shares with anything, and it is only ever touched from the ui thread.
///
/// Writes report whether the element was found. A missing element is never an error, because the markup is free to leave parts of the page out.
pub trait Document {
	/// The current value of an input or select, or `None` if there is no element with this id.
	fn field_value(&self, id: &str) -> Option<String>;
	fn append_option(&mut self, select_id: &str, option: &SelectFieldOption) -> bool;
	fn set_text_content(&mut self, id: &str, text: &str) -> bool;
	fn set_inner_html(&mut self, id: &str, html: &str) -> bool;
	fn set_display(&mut self, id: &str, display: &str) -> bool;
	/// Add or remove `class` on every element matching `selector`, returning how many matched.
	fn set_class(&mut self, selector: Selector<'_>, class: &str, enabled: bool) -> usize;
	/// Show a blocking notification.
	fn alert(&mut self, message: &str);
	/// Write to the diagnostic channel, which the user does not see.
	fn log_error(&mut self, message: &str);
}
