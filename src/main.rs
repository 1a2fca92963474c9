mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use app::App;
use config::AppConfig;

pub const PLACEHOLDER: &str = "-";

#[cfg(all(not(feature = "desktop"), not(test)))]
compile_error!("the `desktop` feature is required to build the application binary");

#[cfg(feature = "desktop")]
fn main() {
    let config = AppConfig::resolve().expect("should resolve application data directory");
    let webview_data_dir = config
        .webview_data_dir()
        .expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Domain Manager"),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}

pub fn format_money(value: f64) -> String {
    if value.is_finite() {
        format!("${value:.2}")
    } else {
        "$0.00".to_string()
    }
}

pub fn format_optional_money(value: Option<f64>) -> String {
    value
        .map(format_money)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_optional_text(value: Option<&str>) -> String {
    value
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Row tint is derived from the resale flag on every render.
pub fn record_row_style(for_sale: bool) -> &'static str {
    if for_sale {
        "background: #f0fdf4;"
    } else {
        "background: #fef2f2;"
    }
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #e5e7eb; border: 1px solid #bbb; padding: 6px 8px; text-align: left; cursor: pointer; user-select: none; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 8px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 8px; padding: 12px; box-sizing: border-box; font-family: sans-serif;"
}
