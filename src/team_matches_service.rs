use std::time::Duration;

use anyhow::Result;

use crate::models::Team;
use crate::models_external::team_matches::TeamMatchesRsp;
use crate::rest_client;

pub struct TeamMatchesService;

impl TeamMatchesService {
    pub async fn update(team: &Team, throttle_s: Option<Duration>) -> Result<TeamMatchesRsp> {
        let url = rest_client::get_team_matches_url(team);
        rest_client::throttle_call(&url, throttle_s).await
    }
}
