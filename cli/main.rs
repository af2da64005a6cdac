//! This module contains the main entrypoint to the laptop_advisor cli. It runs the page controller against a live backend with an in-memory page and prints what the browser would show.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use laptop_advisor_client::{ids, Config, HttpBackend, MemoryDocument, PageController};
use std::path::PathBuf;
use url::Url;

const DEFAULT_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[clap(
	name = "laptop_advisor",
	about = "Predict laptop prices and find laptops that fit a budget.",
	disable_help_subcommand = true
)]
struct Cli {
	#[clap(
		long,
		global = true,
		env = "LAPTOP_ADVISOR_URL",
		help = "the backend origin, http://127.0.0.1:5000 if not set here or in the config"
	)]
	url: Option<Url>,
	#[clap(short, long, global = true, help = "the path to a json config file")]
	config: Option<PathBuf>,
	#[clap(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	#[clap(name = "options", about = "list the brands, operating systems, and processors")]
	ListOptions,
	#[clap(name = "predict", about = "predict the price of a laptop")]
	Predict(PredictOptions),
	#[clap(name = "recommend", about = "find laptops within a budget")]
	Recommend(RecommendOptions),
}

/// Values are passed through as typed, without any validation.
#[derive(Args, Debug)]
struct PredictOptions {
	#[clap(long)]
	brand: String,
	#[clap(long)]
	os: String,
	#[clap(long)]
	processor: String,
	#[clap(long, help = "ram in gb")]
	ram: String,
	#[clap(long, help = "storage in gb")]
	storage: String,
	#[clap(long, help = "screen size in inches")]
	screen_size: String,
	#[clap(long)]
	specs_score: String,
}

#[derive(Args, Debug)]
struct RecommendOptions {
	#[clap(long)]
	budget: String,
	#[clap(long, default_value = "Any")]
	brand: String,
	#[clap(long, default_value = "0", help = "minimum ram in gb")]
	min_ram: String,
	#[clap(long, default_value = "0", help = "minimum storage in gb")]
	min_storage: String,
}

fn main() {
	let cli = Cli::parse();
	if let Err(error) = run(cli) {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => Config::from_json(&std::fs::read_to_string(path)?)?,
		None => Config::default(),
	};
	let base_url = match cli.url.clone().or_else(|| config.base_url.clone()) {
		Some(base_url) => base_url,
		None => Url::parse(DEFAULT_URL)?,
	};
	let backend = HttpBackend::new(&base_url, &config)?;
	// A current thread runtime keeps every handler on one thread, as in the browser.
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()?;
	let mut document = MemoryDocument::laptop_page();
	match &cli.command {
		Command::ListOptions => {}
		Command::Predict(options) => fill_prediction_form(&mut document, options),
		Command::Recommend(options) => fill_recommendation_form(&mut document, options),
	}
	let controller = PageController::new(document, backend, &config);
	match &cli.command {
		Command::ListOptions => runtime.block_on(controller.load_options()),
		Command::Predict(_) => runtime.block_on(controller.submit_prediction()),
		Command::Recommend(_) => runtime.block_on(controller.submit_recommendation()),
	}
	let document = controller.into_document();
	for line in document.console() {
		eprintln!("{}", line.yellow());
	}
	if let Some(alert) = document.alerts().last() {
		return Err(anyhow!("{}", alert));
	}
	match &cli.command {
		Command::ListOptions => {
			for (label, id) in &[
				("brands", ids::PREDICT_BRAND),
				("operating systems", ids::PREDICT_OS),
				("processors", ids::PREDICT_PROCESSOR),
			] {
				println!("{}:", label.bold());
				for value in document.option_values(id) {
					println!("  {}", value);
				}
			}
		}
		Command::Predict(_) => {
			let price = document
				.inner_html(ids::PREDICTED_PRICE)
				.unwrap_or_default();
			println!(
				"Predicted price: {}{}",
				config.render_options().currency_symbol,
				price
			);
		}
		Command::Recommend(_) => {
			println!(
				"{}",
				document
					.inner_html(ids::RECOMMENDATIONS_RESULT)
					.unwrap_or_default()
			);
		}
	}
	Ok(())
}

fn fill_prediction_form(document: &mut MemoryDocument, options: &PredictOptions) {
	let fields = [
		(ids::PREDICT_BRAND, &options.brand),
		(ids::PREDICT_OS, &options.os),
		(ids::PREDICT_PROCESSOR, &options.processor),
		(ids::PREDICT_RAM, &options.ram),
		(ids::PREDICT_STORAGE, &options.storage),
		(ids::PREDICT_SCREEN, &options.screen_size),
		(ids::PREDICT_SPECS, &options.specs_score),
	];
	for (id, value) in fields.iter() {
		document.set_field_value(id, value);
	}
}

fn fill_recommendation_form(document: &mut MemoryDocument, options: &RecommendOptions) {
	let fields = [
		(ids::BUDGET, &options.budget),
		(ids::RECOMMEND_BRAND, &options.brand),
		(ids::MIN_RAM, &options.min_ram),
		(ids::MIN_STORAGE, &options.min_storage),
	];
	for (id, value) in fields.iter() {
		document.set_field_value(id, value);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use laptop_advisor_client::Document;

	#[test]
	fn test_parse_predict() {
		let cli = Cli::try_parse_from(&[
			"laptop_advisor",
			"predict",
			"--brand",
			"HP",
			"--os",
			"Windows 11",
			"--processor",
			"Intel Core i5",
			"--ram",
			"8",
			"--storage",
			"512",
			"--screen-size",
			"15.6",
			"--specs-score",
			"60",
			"--url",
			"http://localhost:8000",
		])
		.unwrap();
		assert_eq!(cli.url.unwrap().as_str(), "http://localhost:8000/");
		let options = match cli.command {
			Command::Predict(options) => options,
			_ => panic!("expected the predict command"),
		};
		let mut document = MemoryDocument::laptop_page();
		fill_prediction_form(&mut document, &options);
		assert_eq!(document.field_value(ids::PREDICT_OS).as_deref(), Some("Windows 11"));
		assert_eq!(document.field_value(ids::PREDICT_SCREEN).as_deref(), Some("15.6"));
		assert_eq!(document.field_value(ids::PREDICT_SPECS).as_deref(), Some("60"));
	}

	#[test]
	fn test_parse_recommend_defaults() {
		let cli =
			Cli::try_parse_from(&["laptop_advisor", "recommend", "--budget", "50000"]).unwrap();
		let options = match cli.command {
			Command::Recommend(options) => options,
			_ => panic!("expected the recommend command"),
		};
		let mut document = MemoryDocument::laptop_page();
		fill_recommendation_form(&mut document, &options);
		assert_eq!(document.field_value(ids::BUDGET).as_deref(), Some("50000"));
		assert_eq!(document.field_value(ids::RECOMMEND_BRAND).as_deref(), Some("Any"));
		assert_eq!(document.field_value(ids::MIN_RAM).as_deref(), Some("0"));
		assert_eq!(document.field_value(ids::MIN_STORAGE).as_deref(), Some("0"));
	}
}
