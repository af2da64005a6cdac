use crate::{config, error::Error, types::Laptop};
use html::{HostNode, Node};
use laptop_advisor_ui::{format_currency, image_with_fallback, status_message, Level, NumberLocale};

pub const LOADING_MESSAGE: &str = "🔍 Finding best laptops for you...";
pub const NO_RESULTS_MESSAGE: &str = "No laptops found matching your criteria.";
const IMAGE_ALT: &str = "Product image";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
	pub number_locale: NumberLocale,
	pub currency_symbol: String,
	pub image_placeholder_url: String,
}

impl Default for RenderOptions {
	fn default() -> RenderOptions {
		RenderOptions {
			number_locale: NumberLocale::default(),
			currency_symbol: config::DEFAULT_CURRENCY_SYMBOL.to_owned(),
			image_placeholder_url: config::DEFAULT_IMAGE_PLACEHOLDER_URL.to_owned(),
		}
	}
}

/// Render one card per laptop, in the order given. An empty list renders the no results message instead.
pub fn render_recommendations(laptops: &[Laptop], options: &RenderOptions) -> String {
	if laptops.is_empty() {
		return status_message(Level::Loading, NO_RESULTS_MESSAGE).render_to_string();
	}
	let cards = laptops
		.iter()
		.map(|laptop| laptop_card(laptop, options))
		.collect::<Vec<_>>();
	Node::Vec(cards).render_to_string()
}

pub fn laptop_card(laptop: &Laptop, options: &RenderOptions) -> Node {
	let specs = [
		("Brand", &laptop.brand),
		("Processor", &laptop.processor),
		("RAM", &laptop.ram),
		("Storage", &laptop.storage),
		("Graphics", &laptop.graphics),
		("Screen", &laptop.screen_size),
	];
	let mut spec_nodes: Vec<Node> = Vec::with_capacity(specs.len() * 3);
	for (index, (label, value)) in specs.iter().enumerate() {
		if index > 0 {
			spec_nodes.push(HostNode::void("br").into());
		}
		spec_nodes.push(HostNode::new("strong").child(format!("{}:", label)).into());
		spec_nodes.push(format!(" {}", value).into());
	}
	let price = format_currency(laptop.price, &options.currency_symbol, options.number_locale);
	HostNode::new("div")
		.attribute("class", "laptop-card")
		.child(image_with_fallback(
			laptop.image_url.to_string(),
			IMAGE_ALT.to_owned(),
			"laptop-image",
			&options.image_placeholder_url,
		))
		.child(
			HostNode::new("div")
				.attribute("class", "laptop-name")
				.child(laptop.name.to_string()),
		)
		.child(
			HostNode::new("div")
				.attribute("class", "laptop-price")
				.child(price),
		)
		.child(
			HostNode::new("div")
				.attribute("class", "laptop-specs")
				.children(spec_nodes),
		)
		.child(
			HostNode::new("span")
				.attribute("class", "laptop-rating")
				.child(format!("⭐ {}", laptop.ratings)),
		)
		.into()
}

pub fn loading_message() -> String {
	status_message(Level::Loading, LOADING_MESSAGE).render_to_string()
}

pub fn error_message(error: &Error) -> String {
	status_message(Level::Error, format!("Error: {}", error)).render_to_string()
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::types::Scalar;

	fn aero() -> Laptop {
		Laptop {
			name: "Aero 14 OLED".into(),
			price: 74990.0,
			brand: "Gigabyte".into(),
			processor: "Intel Core i7 12700H".into(),
			ram: "16 GB".into(),
			storage: "1 TB SSD".into(),
			graphics: "RTX 3050 Ti".into(),
			screen_size: "14 inches".into(),
			ratings: Scalar::Number(4.4),
			image_url: "https://img.example/aero.png".into(),
		}
	}

	#[test]
	fn test_empty_renders_no_results() {
		let html = render_recommendations(&[], &RenderOptions::default());
		assert_eq!(
			html,
			r#"<div class="loading">No laptops found matching your criteria.</div>"#
		);
	}

	#[test]
	fn test_single_card() {
		let html = render_recommendations(&[aero()], &RenderOptions::default());
		insta::assert_snapshot!(html, @r#"<div class="laptop-card"><img src="https://img.example/aero.png" alt="Product image" class="laptop-image" onerror="this.src='https://via.placeholder.com/300x200?text=No+Image'" /><div class="laptop-name">Aero 14 OLED</div><div class="laptop-price">₹74,990</div><div class="laptop-specs"><strong>Brand:</strong> Gigabyte<br /><strong>Processor:</strong> Intel Core i7 12700H<br /><strong>RAM:</strong> 16 GB<br /><strong>Storage:</strong> 1 TB SSD<br /><strong>Graphics:</strong> RTX 3050 Ti<br /><strong>Screen:</strong> 14 inches</div><span class="laptop-rating">⭐ 4.4</span></div>"#);
	}

	#[test]
	fn test_card_fields_appear_once_in_order() {
		let html = render_recommendations(&[aero()], &RenderOptions::default());
		for needle in &["Aero 14 OLED", "Gigabyte", "₹74,990", "⭐ 4.4"] {
			assert_eq!(html.matches(needle).count(), 1, "{}", needle);
		}
		let positions = ["Brand:", "Processor:", "RAM:", "Storage:", "Graphics:", "Screen:"]
			.iter()
			.map(|label| html.find(label).unwrap())
			.collect::<Vec<_>>();
		assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn test_cards_keep_order_and_duplicates() {
		let mut cheap = aero();
		cheap.name = "Vivobook 15".into();
		cheap.price = 38990.0;
		let laptops = vec![aero(), cheap, aero()];
		let html = render_recommendations(&laptops, &RenderOptions::default());
		assert_eq!(html.matches(r#"class="laptop-card""#).count(), 3);
		assert_eq!(html.matches("Aero 14 OLED").count(), 2);
		let first = html.find("Aero 14 OLED").unwrap();
		let second = html.find("Vivobook 15").unwrap();
		let third = html.rfind("Aero 14 OLED").unwrap();
		assert!(first < second && second < third);
	}

	#[test]
	fn test_card_escapes_server_text() {
		let mut laptop = aero();
		laptop.name = "<script>alert(1)</script>".into();
		let html = render_recommendations(&[laptop], &RenderOptions::default());
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
	}

	#[test]
	fn test_card_currency_options() {
		let options = RenderOptions {
			number_locale: NumberLocale::International,
			currency_symbol: "$".to_owned(),
			..RenderOptions::default()
		};
		let mut laptop = aero();
		laptop.price = 1234567.0;
		let html = render_recommendations(&[laptop], &options);
		assert!(html.contains(r#"<div class="laptop-price">$1,234,567</div>"#));
	}

	#[test]
	fn test_messages() {
		assert_eq!(
			loading_message(),
			r#"<div class="loading">🔍 Finding best laptops for you...</div>"#
		);
		assert_eq!(
			error_message(&Error::Application("budget must be a number".to_owned())),
			r#"<div class="error">Error: budget must be a number</div>"#
		);
	}
}
