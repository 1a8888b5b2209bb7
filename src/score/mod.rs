pub mod name_matcher;
pub mod round_extractor;
pub mod scoreboard_builder;
pub mod sort_utils;
pub mod team_scorer;

pub use name_matcher::*;
pub use round_extractor::*;
pub use scoreboard_builder::*;
pub use sort_utils::*;
pub use team_scorer::*;
