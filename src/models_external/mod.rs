pub mod team_matches;
