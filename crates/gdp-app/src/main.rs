//! GDP bar chart - WASM entry point

use gdp_charts::LayoutPolicy;
use gdp_components::{schedule_narrow_notice, GdpPage};
use gdp_fetch::{use_dataset, DATA_URL_PARAM};
use gdp_state::provide_app_state;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use tracing_subscriber::prelude::*;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    mount_to_body(App);
}

fn init_logging() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .build();

    if tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let policy = LayoutPolicy::default();
    let layout = policy.resolve(viewport_width(&policy));
    let state = provide_app_state(layout);

    if layout.needs_notice() {
        schedule_narrow_notice(policy.notice_delay_ms);
    }

    use_dataset(state, data_url_override());

    view! { <GdpPage /> }
}

/// `window.innerWidth`, or the policy's chart width if unreadable
fn viewport_width(policy: &LayoutPolicy) -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(policy.width)
}

/// Dataset URL from `?data=<url>`, if given
fn data_url_override() -> Option<String> {
    let search = window().location().search().ok()?;
    match query_param(&search, DATA_URL_PARAM) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Ignoring malformed query string: {:?}", e);
            None
        }
    }
}

fn query_param(search: &str, key: &str) -> Result<Option<String>, JsValue> {
    Ok(UrlSearchParams::new_with_str(search)?.get(key))
}
