//! Session history page.

use yew::prelude::*;

use crate::app::CompletedRun;
use crate::components::StatCard;

/// Properties for HistoryPage.
#[derive(Properties, PartialEq)]
pub struct HistoryPageProps {
    pub runs: Vec<CompletedRun>,
}

/// History page component.
#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryPageProps) -> Html {
    let total = props.runs.len();
    let metastatic = props
        .runs
        .iter()
        .filter(|run| run.prediction == "Metastatic")
        .count();

    html! {
        <div>
            <h1>{"History"}</h1>
            <p class="text-secondary" style="margin-bottom: 2rem;">
                {"Analyses completed this session. Results live in memory only."}
            </p>

            <div class="stats-grid">
                <StatCard value={total.to_string()} label={"Analyses"} />
                <StatCard
                    value={metastatic.to_string()}
                    label={"Metastatic"}
                    accent={metastatic > 0}
                />
                <StatCard value={(total - metastatic).to_string()} label={"Normal"} />
            </div>

            if props.runs.is_empty() {
                <div class="card">
                    <p>{"No analyses yet."}</p>
                </div>
            } else {
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Completed Runs"}</h2>
                    </div>
                    <div class="run-list">
                        { for props.runs.iter().rev().map(|run| html! {
                            <div class="run-item">
                                <div class="run-info">
                                    <div class="run-file">{ &run.file_name }</div>
                                    <div class="run-label text-secondary">{ &run.prediction }</div>
                                </div>
                                <div class="run-confidence">{ &run.confidence }</div>
                            </div>
                        })}
                    </div>
                </div>
            }
        </div>
    }
}
