use html::{HostNode, Node};

/// An `<img>` that swaps its source for `fallback_src` if the image fails to load.
pub fn image_with_fallback(
	src: String,
	alt: String,
	class: &'static str,
	fallback_src: &str,
) -> Node {
	let fallback_src = fallback_src.replace('\\', "\\\\").replace('\'', "\\'");
	HostNode::void("img")
		.attribute("src", src)
		.attribute("alt", alt)
		.attribute("class", class)
		.attribute("onerror", format!("this.src='{}'", fallback_src))
		.into()
}

#[test]
fn test_image_with_fallback() {
	let image = image_with_fallback(
		"https://img.example/1.png".to_owned(),
		"Laptop".to_owned(),
		"laptop-image",
		"https://img.example/missing.png",
	);
	assert_eq!(
		image.render_to_string(),
		r#"<img src="https://img.example/1.png" alt="Laptop" class="laptop-image" onerror="this.src='https://img.example/missing.png'" />"#
	);
}
