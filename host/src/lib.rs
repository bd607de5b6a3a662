pub mod config;
pub mod draw_log;
pub mod runner;

pub use config::load_config;
pub use draw_log::{DrawCall, DrawLog};
pub use runner::{glyph_report, parse_script, run_inputs, run_script, RunArtifact, DEFAULT_FRAME_DT};
