//! Main application component: sidebar, header, and tab switching.

use web_types::PredictResponse;
use yew::prelude::*;

use crate::api::{self, SelectedImage};
use crate::pages::{DiagnosticsPage, HistoryPage};

/// Validation message when a run starts without its inputs.
const MISSING_INPUT: &str = "Missing image or Backend URL.";
/// Single connectivity message covering every request failure shape.
const CONNECTION_FAILED: &str =
    "Failed to reach AI Backend. Ensure the Cloudflare Tunnel is active and the URL is correct.";

/// Sidebar tabs.
#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Diagnostics,
    History,
    Datasets,
    Settings,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Diagnostics, Tab::History, Tab::Datasets, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Diagnostics => "Diagnostics",
            Tab::History => "History",
            Tab::Datasets => "Datasets",
            Tab::Settings => "Settings",
        }
    }
}

/// A completed analysis kept in memory for the session transcript.
#[derive(Clone, PartialEq)]
pub struct CompletedRun {
    pub file_name: String,
    pub prediction: String,
    pub confidence: String,
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let backend_url = use_state(String::new);
    let selected = use_state(|| None::<SelectedImage>);
    let loading = use_state(|| false);
    let result = use_state(|| None::<PredictResponse>);
    let error = use_state(|| None::<String>);
    let show_heatmap = use_state(|| false);
    let active_tab = use_state(|| Tab::Diagnostics);
    let history = use_state(Vec::<CompletedRun>::new);

    let on_backend_input = {
        let backend_url = backend_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            backend_url.set(input.value());
        })
    };

    let on_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            active_tab.set(tab);
        })
    };

    // Picking a new patch invalidates the previous result and error.
    let on_select = {
        let selected = selected.clone();
        let result = result.clone();
        let error = error.clone();
        let show_heatmap = show_heatmap.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            match SelectedImage::from_file(file) {
                Ok(image) => {
                    selected.set(Some(image));
                    result.set(None);
                    error.set(None);
                    show_heatmap.set(false);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let on_clear = {
        let selected = selected.clone();
        let result = result.clone();
        let error = error.clone();
        let show_heatmap = show_heatmap.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(None);
            result.set(None);
            error.set(None);
            show_heatmap.set(false);
        })
    };

    let on_toggle_heatmap = {
        let show_heatmap = show_heatmap.clone();
        Callback::from(move |_: MouseEvent| {
            show_heatmap.set(!*show_heatmap);
        })
    };

    let on_run = {
        let backend_url = backend_url.clone();
        let selected = selected.clone();
        let loading = loading.clone();
        let result = result.clone();
        let error = error.clone();
        let history = history.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(image) = (*selected).clone() else {
                error.set(Some(MISSING_INPUT.to_string()));
                return;
            };
            if backend_url.trim().is_empty() {
                error.set(Some(MISSING_INPUT.to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            let url = (*backend_url).clone();
            let loading = loading.clone();
            let result = result.clone();
            let error = error.clone();
            let history = history.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::request_prediction(&url, &image.file).await {
                    Ok(data) => {
                        let mut runs = (*history).clone();
                        runs.push(CompletedRun {
                            file_name: image.file_name(),
                            prediction: data.prediction.clone(),
                            confidence: data.confidence.clone(),
                        });
                        history.set(runs);
                        result.set(Some(data));
                    }
                    Err(err) => {
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Analysis request failed: {}", err).into(),
                            );
                        })
                        .forget();
                        error.set(Some(CONNECTION_FAILED.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let connected = !backend_url.trim().is_empty();

    html! {
        <div class="app-container">
            <Sidebar active={*active_tab} connected={connected} on_tab={on_tab} />
            <div class="main-column">
                <header class="top-bar">
                    <div>
                        <h2 class="top-bar-title">{"Lab Workstation"}</h2>
                        <span class="top-bar-subtitle">{"Histology patch classification"}</span>
                    </div>
                    <div class={if connected { "backend-field connected" } else { "backend-field" }}>
                        <label class="backend-label" for="backend-url">{"Backend URL"}</label>
                        <input
                            id="backend-url"
                            type="text"
                            class="backend-input"
                            placeholder="https://...trycloudflare.com"
                            value={(*backend_url).clone()}
                            oninput={on_backend_input}
                        />
                    </div>
                </header>
                <main class="main-content">
                    { match *active_tab {
                        Tab::Diagnostics => html! {
                            <DiagnosticsPage
                                backend_ready={connected}
                                selected={(*selected).clone()}
                                loading={*loading}
                                result={(*result).clone()}
                                error={(*error).clone()}
                                show_heatmap={*show_heatmap}
                                on_select={on_select}
                                on_clear={on_clear}
                                on_run={on_run}
                                on_toggle_heatmap={on_toggle_heatmap}
                            />
                        },
                        Tab::History => html! { <HistoryPage runs={(*history).clone()} /> },
                        Tab::Datasets => html! {
                            <div class="card">
                                <h1>{"Datasets"}</h1>
                                <p>{"Reference slide collections are managed on the inference host."}</p>
                            </div>
                        },
                        Tab::Settings => html! {
                            <div class="card">
                                <h1>{"Settings"}</h1>
                                <p>{"Session preferences will appear here."}</p>
                            </div>
                        },
                    }}
                </main>
            </div>
        </div>
    }
}

/// Properties for the sidebar.
#[derive(Properties, PartialEq)]
struct SidebarProps {
    active: Tab,
    connected: bool,
    on_tab: Callback<Tab>,
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let status_class = if props.connected {
        "status-dot online"
    } else {
        "status-dot offline"
    };
    let status_text = if props.connected {
        "Cloud Connected"
    } else {
        "Offline Mode"
    };

    html! {
        <aside class="sidebar">
            <div class="nav-brand">{"Patho"}<span class="brand-accent">{"Scope"}</span></div>
            <nav>
                <ul class="nav-links">
                    { for Tab::ALL.iter().map(|&tab| {
                        let on_tab = props.on_tab.clone();
                        let class = if tab == props.active { "nav-link active" } else { "nav-link" };
                        html! {
                            <li>
                                <button class={class} onclick={Callback::from(move |_: MouseEvent| on_tab.emit(tab))}>
                                    { tab.label() }
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </nav>
            <div class="sidebar-footer">
                <p class="stat-label">{"System Health"}</p>
                <div class="status-row">
                    <span class={status_class}></span>
                    <span>{ status_text }</span>
                </div>
            </div>
        </aside>
    }
}
