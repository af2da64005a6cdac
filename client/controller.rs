use crate::{
	backend::Backend,
	config::Config,
	document::{Document, Selector},
	ids,
	render::{error_message, loading_message, render_recommendations, RenderOptions},
	types::{
		OptionsPayload, PredictionRequest, PredictionResponse, RecommendationRequest,
		RecommendationResponse,
	},
};
use laptop_advisor_ui::{format_number, SelectFieldOption};
use std::cell::{Cell, Ref, RefCell};

/// Binds the page's forms and tabs to the backend.
///
/// Every handler runs on the ui thread. A handler suspends only while its request is in flight and never holds the document across that suspension, so the document has a single writer at any moment.
pub struct PageController<D, B> {
	document: RefCell<D>,
	backend: B,
	render_options: RenderOptions,
	discard_stale_responses: bool,
	prediction_sequence: Cell<u64>,
	recommendation_sequence: Cell<u64>,
}

impl<D, B> PageController<D, B>
where
	D: Document,
	B: Backend,
{
	pub fn new(document: D, backend: B, config: &Config) -> PageController<D, B> {
		PageController {
			document: RefCell::new(document),
			backend,
			render_options: config.render_options(),
			discard_stale_responses: config.discard_stale_responses(),
			prediction_sequence: Cell::new(0),
			recommendation_sequence: Cell::new(0),
		}
	}

	pub fn document(&self) -> Ref<'_, D> {
		self.document.borrow()
	}

	pub fn into_document(self) -> D {
		self.document.into_inner()
	}

	/// Fetch the select options once and append them after whatever the markup already lists. A failure is only logged, which leaves the selects with their static entries.
	pub async fn load_options(&self) {
		let result = self.backend.options().await;
		let mut document = self.document.borrow_mut();
		match result {
			Ok(options) => append_all_options(&mut *document, &options),
			Err(error) => document.log_error(&format!("Error loading options: {}", error)),
		}
	}

	/// Make `tab_name`'s panel and the `button_index`th tab button the only active ones.
	pub fn show_tab(&self, tab_name: &str, button_index: usize) {
		let mut document = self.document.borrow_mut();
		document.set_class(
			Selector::Class(ids::TAB_PANEL_CLASS),
			ids::ACTIVE_CLASS,
			false,
		);
		document.set_class(
			Selector::Class(ids::TAB_BUTTON_CLASS),
			ids::ACTIVE_CLASS,
			false,
		);
		let panel_id = ids::tab_panel_id(tab_name);
		if document.set_class(Selector::Id(&panel_id), ids::ACTIVE_CLASS, true) == 0 {
			log_missing(&mut *document, &panel_id);
		}
		document.set_class(
			Selector::NthOfClass(ids::TAB_BUTTON_CLASS, button_index),
			ids::ACTIVE_CLASS,
			true,
		);
	}

	/// Send the prediction form and show the price, or alert with the reason it failed.
	pub async fn submit_prediction(&self) {
		let request = {
			let mut document = self.document.borrow_mut();
			let document = &mut *document;
			PredictionRequest {
				brand: read_field(document, ids::PREDICT_BRAND),
				os: read_field(document, ids::PREDICT_OS),
				processor: read_field(document, ids::PREDICT_PROCESSOR),
				ram: read_field(document, ids::PREDICT_RAM),
				storage: read_field(document, ids::PREDICT_STORAGE),
				screen_size: read_field(document, ids::PREDICT_SCREEN),
				specs_score: read_field(document, ids::PREDICT_SPECS),
			}
		};
		let sequence = next_sequence(&self.prediction_sequence);
		let result = self
			.backend
			.predict(request)
			.await
			.and_then(PredictionResponse::into_result);
		let mut document = self.document.borrow_mut();
		if !self.is_current(&self.prediction_sequence, sequence) {
			document.log_error(
				"Discarding a prediction response superseded by a newer submission.",
			);
			return;
		}
		match result {
			Ok(price) => {
				let price = format_number(price, self.render_options.number_locale);
				if !document.set_text_content(ids::PREDICTED_PRICE, &price) {
					log_missing(&mut *document, ids::PREDICTED_PRICE);
				}
				if !document.set_display(ids::PREDICTION_RESULT, "block") {
					log_missing(&mut *document, ids::PREDICTION_RESULT);
				}
			}
			Err(error) if error.is_application() => document.alert(&format!("Error: {}", error)),
			Err(error) => document.alert(&format!("Error making prediction: {}", error)),
		}
	}

	/// Send the recommendation form, showing a loading message until the cards or an error replace it.
	pub async fn submit_recommendation(&self) {
		let request = {
			let mut document = self.document.borrow_mut();
			let document = &mut *document;
			let request = RecommendationRequest {
				budget: read_field(document, ids::BUDGET),
				brand: read_field(document, ids::RECOMMEND_BRAND),
				min_ram: read_field(document, ids::MIN_RAM),
				min_storage: read_field(document, ids::MIN_STORAGE),
			};
			if !document.set_inner_html(ids::RECOMMENDATIONS_RESULT, &loading_message()) {
				log_missing(document, ids::RECOMMENDATIONS_RESULT);
			}
			request
		};
		let sequence = next_sequence(&self.recommendation_sequence);
		let result = self
			.backend
			.recommend(request)
			.await
			.and_then(RecommendationResponse::into_result);
		let mut document = self.document.borrow_mut();
		if !self.is_current(&self.recommendation_sequence, sequence) {
			document.log_error(
				"Discarding a recommendation response superseded by a newer submission.",
			);
			return;
		}
		let html = match result {
			Ok(laptops) => render_recommendations(&laptops, &self.render_options),
			Err(error) => error_message(&error),
		};
		document.set_inner_html(ids::RECOMMENDATIONS_RESULT, &html);
	}

	fn is_current(&self, counter: &Cell<u64>, sequence: u64) -> bool {
		!self.discard_stale_responses || counter.get() == sequence
	}
}

fn next_sequence(counter: &Cell<u64>) -> u64 {
	let sequence = counter.get() + 1;
	counter.set(sequence);
	sequence
}

fn append_all_options<D: Document + ?Sized>(document: &mut D, options: &OptionsPayload) {
	let targets: [(&[&str], &[String]); 3] = [
		(&[ids::PREDICT_BRAND, ids::RECOMMEND_BRAND], &options.brands),
		(&[ids::PREDICT_OS], &options.os),
		(&[ids::PREDICT_PROCESSOR], &options.processors),
	];
	for (select_ids, values) in targets.iter() {
		for value in values.iter() {
			let option = SelectFieldOption::from_value(value.as_str());
			for select_id in select_ids.iter() {
				if !document.append_option(select_id, &option) {
					log_missing(document, select_id);
				}
			}
		}
	}
}

fn read_field<D: Document + ?Sized>(document: &mut D, id: &str) -> String {
	match document.field_value(id) {
		Some(value) => value,
		None => {
			log_missing(document, id);
			String::new()
		}
	}
}

fn log_missing<D: Document + ?Sized>(document: &mut D, id: &str) {
	document.log_error(&format!("No element with id \"{}\" on the page.", id));
}
