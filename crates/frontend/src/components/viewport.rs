//! Sample viewport: upload dropzone, preview, and run controls.

use yew::prelude::*;

use crate::api::SelectedImage;
use crate::components::Loading;

/// Properties for Viewport component.
#[derive(Properties, PartialEq)]
pub struct ViewportProps {
    pub selected: Option<SelectedImage>,
    pub loading: bool,
    pub show_heatmap: bool,
    pub heatmap: Option<String>,
    pub run_disabled: bool,
    pub on_select: Callback<Event>,
    pub on_clear: Callback<MouseEvent>,
    pub on_run: Callback<MouseEvent>,
}

/// Sample viewport component.
#[function_component(Viewport)]
pub fn viewport(props: &ViewportProps) -> Html {
    html! {
        <div class="card viewport">
            <div class="card-header">
                <h2 class="card-title">{"Sample Viewport"}</h2>
            </div>
            {
                match &props.selected {
                    None => html! {
                        <label class="dropzone">
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden-input"
                                onchange={props.on_select.clone()}
                            />
                            <h3 class="dropzone-title">{"Load Histology Patch"}</h3>
                            <p class="text-secondary">{"Select a slide scan (.png, .jpg)"}</p>
                        </label>
                    },
                    Some(image) => {
                        // Swap the heatmap in for the preview while the
                        // explanation view is toggled on.
                        let overlay_active = props.show_heatmap && props.heatmap.is_some();
                        let src = match &props.heatmap {
                            Some(heatmap) if props.show_heatmap => heatmap.clone(),
                            _ => image.preview_url.clone(),
                        };

                        html! {
                            <div class="viewport-body">
                                <div class="scan-frame">
                                    <img class="scan-image" src={src} alt="Histology patch" />
                                    if overlay_active {
                                        <div class="scan-badge">{"GRAD-CAM HEATMAP OVERLAY"}</div>
                                    }
                                    if props.loading {
                                        <div class="scan-overlay">
                                            <Loading caption={Some("Extracting morphological features...".to_string())} />
                                        </div>
                                    }
                                </div>
                                <div class="viewport-actions">
                                    <button class="btn btn-secondary" onclick={props.on_clear.clone()}>
                                        {"Clear Case"}
                                    </button>
                                    <button
                                        class="btn btn-primary"
                                        onclick={props.on_run.clone()}
                                        disabled={props.run_disabled}
                                    >
                                        { if props.loading { "Analyzing..." } else { "Run Analysis" } }
                                    </button>
                                </div>
                            </div>
                        }
                    }
                }
            }
        </div>
    }
}
