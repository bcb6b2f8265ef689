pub mod calendar;
pub mod content;
pub mod gemini;
pub mod models;
pub mod pipeline;
pub mod prompt;

pub use calendar::{MonthSchedule, TENNIS_CALENDAR, active_tournaments};
pub use content::{Rejection, normalize_content, validate_content};
pub use gemini::fetch_completion;
pub use pipeline::{PipelineOutcome, RunOptions, prepare_content, run_fetch_pipeline};
pub use prompt::build_prompt;
