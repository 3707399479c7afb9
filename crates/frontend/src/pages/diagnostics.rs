//! Diagnostics workspace page.

use web_types::PredictResponse;
use yew::prelude::*;

use crate::api::SelectedImage;
use crate::components::{ErrorBanner, PipelineLog, TranscriptPanel, Viewport};

/// Properties for DiagnosticsPage.
#[derive(Properties, PartialEq)]
pub struct DiagnosticsPageProps {
    pub backend_ready: bool,
    pub selected: Option<SelectedImage>,
    pub loading: bool,
    pub result: Option<PredictResponse>,
    pub error: Option<String>,
    pub show_heatmap: bool,
    pub on_select: Callback<Event>,
    pub on_clear: Callback<MouseEvent>,
    pub on_run: Callback<MouseEvent>,
    pub on_toggle_heatmap: Callback<MouseEvent>,
}

/// Diagnostics page component.
#[function_component(DiagnosticsPage)]
pub fn diagnostics_page(props: &DiagnosticsPageProps) -> Html {
    // No re-run until the case is cleared, and never without a backend.
    let run_disabled = props.loading || props.result.is_some() || !props.backend_ready;
    let heatmap = props.result.as_ref().and_then(|r| r.heatmap.clone());

    html! {
        <div>
            if let Some(message) = &props.error {
                <ErrorBanner message={message.clone()} />
            }

            <div class="workspace-grid">
                <div class="workspace-main">
                    <Viewport
                        selected={props.selected.clone()}
                        loading={props.loading}
                        show_heatmap={props.show_heatmap}
                        heatmap={heatmap}
                        run_disabled={run_disabled}
                        on_select={props.on_select.clone()}
                        on_clear={props.on_clear.clone()}
                        on_run={props.on_run.clone()}
                    />
                    <PipelineLog loading={props.loading} complete={props.result.is_some()} />
                </div>
                <div class="workspace-side">
                    <TranscriptPanel
                        result={props.result.clone()}
                        show_heatmap={props.show_heatmap}
                        on_toggle_heatmap={props.on_toggle_heatmap.clone()}
                    />
                </div>
            </div>
        </div>
    }
}
