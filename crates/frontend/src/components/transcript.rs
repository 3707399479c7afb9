//! Diagnostic transcript panel.

use web_types::PredictResponse;
use yew::prelude::*;

/// Properties for TranscriptPanel component.
#[derive(Properties, PartialEq)]
pub struct TranscriptPanelProps {
    pub result: Option<PredictResponse>,
    pub show_heatmap: bool,
    pub on_toggle_heatmap: Callback<MouseEvent>,
}

/// Styling class for the diagnosis card.
fn diagnosis_class(prediction: &str) -> &'static str {
    if prediction == "Metastatic" {
        "diagnosis-card metastatic"
    } else {
        "diagnosis-card normal"
    }
}

/// Diagnostic transcript panel component.
#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    let Some(result) = &props.result else {
        return html! {
            <div class="card transcript">
                <div class="card-header">
                    <h2 class="card-title">{"Diagnostic Transcript"}</h2>
                </div>
                <div class="transcript-empty">
                    <p class="transcript-empty-title">{"Awaiting Input"}</p>
                    <p class="text-secondary">{"Select an image patch for classification."}</p>
                </div>
            </div>
        };
    };

    let on_export = Callback::from(|_: MouseEvent| {
        // Report rendering happens externally; hand off to the print dialog.
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    html! {
        <div class="card transcript">
            <div class="card-header">
                <h2 class="card-title">{"Diagnostic Transcript"}</h2>
            </div>

            <div class={diagnosis_class(&result.prediction)}>
                <h2 class="diagnosis-label">{ &result.prediction }</h2>
                <p class="diagnosis-caption">{"Inference Conclusion"}</p>
                <div class="confidence">
                    <div class="confidence-header">
                        <span class="stat-label">{"Diagnostic Confidence"}</span>
                        <span class="confidence-value">{ &result.confidence }</span>
                    </div>
                    <div class="progress-bar">
                        // The confidence string doubles as the bar width.
                        <div class="progress-bar-fill" style={format!("width: {}", result.confidence)} />
                    </div>
                </div>
            </div>

            <div class="explanation">
                <div class="explanation-header">
                    <h4 class="stat-label">{"Clinical Explanation"}</h4>
                    if result.heatmap.is_some() {
                        <button
                            class={if props.show_heatmap { "btn btn-primary btn-small" } else { "btn btn-secondary btn-small" }}
                            onclick={props.on_toggle_heatmap.clone()}
                        >
                            { if props.show_heatmap { "Hide Map" } else { "View Grad-CAM Map" } }
                        </button>
                    }
                </div>
                <blockquote class="explanation-quote">
                    { format!("\u{201c}{}\u{201d}", result.message) }
                </blockquote>
            </div>

            <button class="btn btn-dark export-btn" onclick={on_export}>
                {"Export Laboratory Report"}
            </button>
        </div>
    }
}
