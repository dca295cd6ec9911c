use std::{collections::HashMap, sync::Arc, time::Instant};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::log;

use crate::db::Db;
use crate::match_stats_service::MatchStatsService;
use crate::models::Team;
use crate::models_api::team_matches::{ApiMatch, ApiTeamMatches, ApiTeamMatchesState};
use crate::models_external::team_matches::TeamMatchesRsp;
use crate::LogResult;

pub struct ApiTeamMatchesService {
    in_mem: HashMap<Team, ApiTeamMatchesState>,
    pub db: Db<Team, ApiTeamMatches>,
}
pub type SafeApiTeamMatchesService = Arc<RwLock<ApiTeamMatchesService>>;

impl ApiTeamMatchesService {
    pub fn new() -> SafeApiTeamMatchesService {
        let db = Db::<Team, ApiTeamMatches>::new("v2_team_matches");
        // serve the last decorated views straight away after a restart
        let in_mem = db.read_all().into_iter()
            .filter_map(|e| e.team_code.parse::<Team>().ok()
                .map(|team| (team, ApiTeamMatchesState::Loaded { data: e })))
            .collect();
        Arc::new(RwLock::new(ApiTeamMatchesService { in_mem, db }))
    }

    pub fn update(&mut self, team: &Team, rsp: &TeamMatchesRsp) -> ApiTeamMatches {
        let before = Instant::now();
        let recent_matches: Vec<ApiMatch> = rsp.recent_matches.iter().map(ApiMatch::from).collect();
        let stats = MatchStatsService::aggregate(&recent_matches);
        let decorated = ApiTeamMatches {
            team_code: team.to_string(),
            theme_class: team.theme_class().to_string(),
            team_banner_url: rsp.team_banner_url.clone(),
            latest_match: ApiMatch::from(&rsp.latest_match_details),
            recent_matches,
            stats,
            fetched_at: Utc::now(),
        };

        log::info!("[API.MATCHES] Decorated {team} {} matches {:.2?}", decorated.recent_matches.len(), before.elapsed());
        self.db.write(team, &decorated).ok_log("[API.MATCHES] Failed to persist");
        self.in_mem.insert(team.clone(), ApiTeamMatchesState::Loaded { data: decorated.clone() });
        decorated
    }

    /// A stale loaded view beats an error message, only flag teams
    /// that never got data.
    pub fn set_failed(&mut self, team: &Team, message: &str) {
        let state = self.in_mem.entry(team.clone()).or_insert(ApiTeamMatchesState::Loading);
        if !matches!(state, ApiTeamMatchesState::Loaded { .. }) {
            *state = ApiTeamMatchesState::Failed { message: message.to_string() };
        }
    }

    pub fn read(&self, team: &Team) -> ApiTeamMatchesState {
        self.in_mem.get(team).cloned().unwrap_or(ApiTeamMatchesState::Loading)
    }
}
