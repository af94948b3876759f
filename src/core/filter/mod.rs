pub mod criteria;
pub mod pipeline;
pub mod stats;

pub use criteria::*;
pub use pipeline::*;
pub use stats::*;
