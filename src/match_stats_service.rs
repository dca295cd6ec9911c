use crate::models_api::stats::ApiMatchStats;
use crate::models_api::team_matches::ApiMatch;

pub struct MatchStatsService;

impl MatchStatsService {
    /// Single pass tally. Only the three exact statuses count, anything
    /// else ("Abandoned", "No Result", ...) is skipped.
    pub fn aggregate(matches: &[ApiMatch]) -> ApiMatchStats {
        let mut stats = ApiMatchStats::default();
        for m in matches {
            match m.match_status.as_str() {
                "Won" => stats.won += 1,
                "Lost" => stats.lost += 1,
                "Drawn" => stats.drawn += 1,
                _ => {}
            }
        }
        stats
    }
}
