mod init;
mod serve;
mod stats;

pub use init::execute_init;
pub use serve::execute_serve;
pub use stats::{execute_stats, summarize_json};
