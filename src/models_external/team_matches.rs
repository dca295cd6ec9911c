use serde::{Deserialize, Serialize};

/// One match exactly as the upstream IPL API serves it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MatchDetails {
    pub id: String,
    pub date: String,
    pub venue: String,
    pub result: String,
    pub umpires: Vec<String>,
    pub man_of_the_match: String,
    pub competing_team: String,
    pub competing_team_logo: String,
    pub first_innings: String,
    pub second_innings: String,
    pub match_status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamMatchesRsp {
    pub team_banner_url: String,
    pub latest_match_details: MatchDetails,
    pub recent_matches: Vec<MatchDetails>,
}
