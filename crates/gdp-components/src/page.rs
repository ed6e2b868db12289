//! Page layout: title, description, chart, status

use gdp_charts::{colors, GdpBarChart};
use gdp_state::use_app_state;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn GdpPage() -> impl IntoView {
    let state = use_app_state();
    let layout = state.layout;
    let dataset = state.dataset;

    let title = move || dataset.with(|d| d.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let description =
        move || dataset.with(|d| d.as_ref().map(|d| d.description.clone()).unwrap_or_default());

    view! {
        <div class="gdp-page">
            <header class="gdp-header">
                <h1 id="title">{title}</h1>
                <p id="description">{description}</p>
            </header>

            <main class="chart-container">
                {move || {
                    dataset.get().map(|d| {
                        view! {
                            <Title text=d.name.clone() />
                            <GdpBarChart layout=layout dataset=d />
                        }
                    })
                }}
            </main>

            <footer class="gdp-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let status = state.status;
    let error = state.error;

    view! {
        <div class="status-bar">
            <div class="sb-status">
                <span class=move || format!("sb-value {}", status.get().css_class())>
                    {move || (!status.get().is_terminal()).then(|| status.get().label())}
                </span>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error" role="alert" style=format!("color: {}", colors::ERROR)>
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
