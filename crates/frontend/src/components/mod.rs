//! Reusable UI components.

mod error_banner;
mod loading;
mod pipeline_log;
mod stat_card;
mod transcript;
mod viewport;

pub use error_banner::ErrorBanner;
pub use loading::Loading;
pub use pipeline_log::PipelineLog;
pub use stat_card::StatCard;
pub use transcript::TranscriptPanel;
pub use viewport::Viewport;
