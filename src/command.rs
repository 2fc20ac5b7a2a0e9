mod extract;
mod stats;

pub use extract::Extract;
pub use stats::Stats;
