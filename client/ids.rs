//! Element ids and class names the page markup must provide. Renaming any of them in the markup silently unbinds the controller from that element.

pub const PREDICT_FORM: &str = "predict-form";
pub const PREDICT_BRAND: &str = "predict-brand";
pub const PREDICT_OS: &str = "predict-os";
pub const PREDICT_PROCESSOR: &str = "predict-processor";
pub const PREDICT_RAM: &str = "predict-ram";
pub const PREDICT_STORAGE: &str = "predict-storage";
pub const PREDICT_SCREEN: &str = "predict-screen";
pub const PREDICT_SPECS: &str = "predict-specs";
pub const PREDICTED_PRICE: &str = "predicted-price";
pub const PREDICTION_RESULT: &str = "prediction-result";

pub const RECOMMEND_FORM: &str = "recommend-form";
pub const BUDGET: &str = "budget";
pub const RECOMMEND_BRAND: &str = "recommend-brand";
pub const MIN_RAM: &str = "min-ram";
pub const MIN_STORAGE: &str = "min-storage";
pub const RECOMMENDATIONS_RESULT: &str = "recommendations-result";

pub const TAB_PANEL_CLASS: &str = "tab-content";
pub const TAB_BUTTON_CLASS: &str = "tab-btn";
pub const ACTIVE_CLASS: &str = "active";
/// The attribute on a tab button naming the tab it opens.
pub const TAB_NAME_ATTRIBUTE: &str = "data-tab";

pub const CONFIG_ELEMENT: &str = "laptop-advisor-config";

/// The id of the panel for the tab named `tab_name`.
pub fn tab_panel_id(tab_name: &str) -> String {
	format!("{}-tab", tab_name)
}
