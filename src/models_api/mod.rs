pub mod stats;
pub mod team_matches;
pub mod teams;
