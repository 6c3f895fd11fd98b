mod threshold;
mod types;

pub use threshold::WhiteThreshold;
pub use types::BackgroundKey;
