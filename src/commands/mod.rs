pub mod polls;
pub mod predict;
pub mod types;

pub use polls::polls_cmd;
pub use predict::{predict_cmd, run_prediction};
pub use types::{PollsConfig, PredictConfig};
