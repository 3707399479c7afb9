//! Pipeline status panel.
//!
//! The stages mirror what the external inference service runs; their display
//! states derive purely from the request flags, there is no live telemetry.

use yew::prelude::*;

/// Properties for PipelineLog component.
#[derive(Properties, PartialEq)]
pub struct PipelineLogProps {
    pub loading: bool,
    pub complete: bool,
}

/// Derive the display state for a pipeline stage.
fn stage_state(loading: bool, complete: bool, done_word: &'static str) -> (&'static str, &'static str) {
    if complete {
        (done_word, "done")
    } else if loading {
        ("RUNNING", "running")
    } else {
        ("PENDING", "pending")
    }
}

/// Pipeline status panel component.
#[function_component(PipelineLog)]
pub fn pipeline_log(props: &PipelineLogProps) -> Html {
    let stages = [
        (
            "Preprocessing: spatial filtering",
            stage_state(props.loading, props.complete, "SUCCESS"),
        ),
        (
            "Feature extraction: CNN deep layers",
            stage_state(props.loading, props.complete, "STABLE"),
        ),
        (
            "XAI: Grad-CAM activation mapping",
            if props.complete {
                ("COMPILED", "done")
            } else {
                ("IDLE", "pending")
            },
        ),
    ];

    html! {
        <div class="card pipeline-log">
            <div class="card-header">
                <h2 class="card-title">{"Pipeline Execution"}</h2>
            </div>
            <div class="pipeline-rows">
                <div class="pipeline-row done">
                    <span>{"> System check"}</span>
                    <span class="pipeline-state">{"AUTHORIZED"}</span>
                </div>
                { for stages.iter().map(|(name, (word, state))| html! {
                    <div class={classes!("pipeline-row", *state)}>
                        <span>{ format!("> {}", name) }</span>
                        <span class="pipeline-state">{ *word }</span>
                    </div>
                })}
            </div>
        </div>
    }
}
