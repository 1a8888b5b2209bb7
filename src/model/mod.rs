pub mod leaderboard;
pub mod roster;
pub mod score;

pub use leaderboard::*;
pub use roster::*;
pub use score::*;
