use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models_api::stats::ApiMatchStats;
use crate::models_external::team_matches::MatchDetails;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiMatch {
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
    /// Kept raw, unrecognized statuses like "Abandoned" pass through to the view.
    pub match_status: String,
}

impl From<&MatchDetails> for ApiMatch {
    fn from(v: &MatchDetails) -> Self {
        ApiMatch {
            id: v.id.clone(),
            date: v.date.clone(),
            venue: v.venue.clone(),
            result: v.result.clone(),
            umpires: v.umpires.clone(),
            man_of_the_match: v.man_of_the_match.clone(),
            competing_team: v.competing_team.clone(),
            competing_team_logo: v.competing_team_logo.clone(),
            first_innings: v.first_innings.clone(),
            second_innings: v.second_innings.clone(),
            match_status: v.match_status.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiTeamMatches {
    pub team_code: String,
    pub theme_class: String,
    pub team_banner_url: String,
    pub latest_match: ApiMatch,
    pub recent_matches: Vec<ApiMatch>,
    pub stats: ApiMatchStats,
    pub fetched_at: DateTime<Utc>,
}

/// Per team fetch lifecycle, serialized with a `status` tag.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiTeamMatchesState {
    Loading,
    Loaded { data: ApiTeamMatches },
    Failed { message: String },
}
