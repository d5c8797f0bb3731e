pub mod game;
pub mod stats;
pub mod health;

pub use game::*;
pub use stats::*;
pub use health::*;
