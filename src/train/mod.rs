pub mod epoch_stats;
pub mod loop_fn;
pub mod report;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use loop_fn::{train_loop, train_epoch, EpochError};
pub use report::TrainReport;
pub use train_config::TrainConfig;
