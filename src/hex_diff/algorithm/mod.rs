mod minimize_colors;
mod run_state;

pub use minimize_colors::{minimize_colors, tag_bytes, Tag};
pub use run_state::{LineAction, RunState};
