use crate::{
	backend::HttpBackend,
	config::Config,
	controller::PageController,
	document::{Document, Selector},
	ids,
};
use laptop_advisor_ui::SelectFieldOption;
use std::rc::Rc;
use url::Url;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;

type BrowserController = PageController<BrowserDocument, HttpBackend>;

/// The live page, reached through `web-sys`.
pub struct BrowserDocument {
	window: web_sys::Window,
	document: web_sys::Document,
}

impl BrowserDocument {
	pub fn new(window: web_sys::Window, document: web_sys::Document) -> BrowserDocument {
		BrowserDocument { window, document }
	}

	fn select(&self, selector: Selector<'_>) -> Vec<web_sys::Element> {
		match selector {
			Selector::Id(id) => self.document.get_element_by_id(id).into_iter().collect(),
			Selector::Class(class) => self.elements_with_class(class),
			Selector::NthOfClass(class, index) => self
				.elements_with_class(class)
				.into_iter()
				.nth(index)
				.into_iter()
				.collect(),
		}
	}

	fn elements_with_class(&self, class: &str) -> Vec<web_sys::Element> {
		let list = match self.document.query_selector_all(&format!(".{}", class)) {
			Ok(list) => list,
			Err(_) => return Vec::new(),
		};
		(0..list.length())
			.filter_map(|index| list.item(index))
			.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
			.collect()
	}
}

impl Document for BrowserDocument {
	fn field_value(&self, id: &str) -> Option<String> {
		let element = self.document.get_element_by_id(id)?;
		if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
			Some(input.value())
		} else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
			Some(select.value())
		} else {
			Some(element.get_attribute("value").unwrap_or_default())
		}
	}

	fn append_option(&mut self, select_id: &str, option: &SelectFieldOption) -> bool {
		let select = match self.document.get_element_by_id(select_id) {
			Some(select) => select,
			None => return false,
		};
		let option =
			match web_sys::HtmlOptionElement::new_with_text_and_value(&option.text, &option.value)
			{
				Ok(option) => option,
				Err(_) => return false,
			};
		select.append_child(&option).is_ok()
	}

	fn set_text_content(&mut self, id: &str, text: &str) -> bool {
		match self.document.get_element_by_id(id) {
			Some(element) => {
				element.set_text_content(Some(text));
				true
			}
			None => false,
		}
	}

	fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
		match self.document.get_element_by_id(id) {
			Some(element) => {
				element.set_inner_html(html);
				true
			}
			None => false,
		}
	}

	fn set_display(&mut self, id: &str, display: &str) -> bool {
		self.document
			.get_element_by_id(id)
			.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
			.map(|element| element.style().set_property("display", display).is_ok())
			.unwrap_or(false)
	}

	fn set_class(&mut self, selector: Selector<'_>, class: &str, enabled: bool) -> usize {
		let elements = self.select(selector);
		for element in elements.iter() {
			let class_list = element.class_list();
			let result = if enabled {
				class_list.add_1(class)
			} else {
				class_list.remove_1(class)
			};
			result.ok();
		}
		elements.len()
	}

	fn alert(&mut self, message: &str) {
		self.window.alert_with_message(message).ok();
	}

	fn log_error(&mut self, message: &str) {
		web_sys::console::error_1(&JsValue::from_str(message));
	}
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("there is no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("there is no document"))?;
	let config = read_config(&document)?;
	let base_url = match config.base_url.clone() {
		Some(base_url) => base_url,
		None => Url::parse(&window.location().origin()?).map_err(to_js_error)?,
	};
	let backend = HttpBackend::new(&base_url, &config).map_err(to_js_error)?;
	let controller = Rc::new(PageController::new(
		BrowserDocument::new(window, document.clone()),
		backend,
		&config,
	));
	bind_submit(&document, ids::PREDICT_FORM, controller.clone(), |controller| {
		spawn_local(async move { controller.submit_prediction().await })
	})?;
	bind_submit(
		&document,
		ids::RECOMMEND_FORM,
		controller.clone(),
		|controller| spawn_local(async move { controller.submit_recommendation().await }),
	)?;
	bind_tabs(&document, controller.clone())?;
	spawn_local(async move { controller.load_options().await });
	Ok(())
}

fn read_config(document: &web_sys::Document) -> Result<Config, JsValue> {
	let json = document
		.get_element_by_id(ids::CONFIG_ELEMENT)
		.and_then(|element| element.text_content());
	match json {
		Some(json) => Config::from_json(&json).map_err(to_js_error),
		None => Ok(Config::default()),
	}
}

fn bind_submit(
	document: &web_sys::Document,
	form_id: &str,
	controller: Rc<BrowserController>,
	handler: fn(Rc<BrowserController>),
) -> Result<(), JsValue> {
	let form = match document.get_element_by_id(form_id) {
		Some(form) => form,
		None => return Ok(()),
	};
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		event.prevent_default();
		handler(controller.clone());
	}));
	form.add_event_listener_with_callback("submit", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

fn bind_tabs(
	document: &web_sys::Document,
	controller: Rc<BrowserController>,
) -> Result<(), JsValue> {
	let buttons = document.query_selector_all(&format!(".{}", ids::TAB_BUTTON_CLASS))?;
	for index in 0..buttons.length() {
		let button = match buttons
			.item(index)
			.and_then(|node| node.dyn_into::<web_sys::Element>().ok())
		{
			Some(button) => button,
			None => continue,
		};
		let tab_name = match button.get_attribute(ids::TAB_NAME_ATTRIBUTE) {
			Some(tab_name) => tab_name,
			None => continue,
		};
		let controller = controller.clone();
		let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |_: web_sys::Event| {
			controller.show_tab(&tab_name, index as usize);
		}));
		button.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
		callback_fn.forget();
	}
	Ok(())
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
	JsValue::from_str(&error.to_string())
}
