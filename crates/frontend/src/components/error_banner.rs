//! Connectivity error banner.

use yew::prelude::*;

/// Properties for ErrorBanner component.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Error banner shown above the workspace.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error-banner">
            <p class="error-banner-title">{"Connection Error"}</p>
            <p class="error-banner-message">{ &props.message }</p>
        </div>
    }
}
