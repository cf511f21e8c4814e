//! single_track - renderer-agnostic bicycle-model core (pure types + evaluator)

pub mod types;
pub mod steering;
pub mod loads;
pub mod evaluate;
pub mod trajectory;

pub use types::*;
pub use evaluate::evaluate;
pub use trajectory::{Trajectory, run};
