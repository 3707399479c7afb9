//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
    /// Highlight the card (used for non-zero metastatic counts).
    #[prop_or_default]
    pub accent: bool,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let class = if props.accent {
        "card stat-card accent"
    } else {
        "card stat-card"
    };

    html! {
        <div class={class}>
            <div class="stat-value">{ &props.value }</div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}
