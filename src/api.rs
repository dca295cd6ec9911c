use std::{net::SocketAddr, time::Duration};

use axum::{extract::{Path, State}, response::{IntoResponse, Response}, Json, Router};
use reqwest::StatusCode;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tracing::log;

use crate::api_team_matches_service::SafeApiTeamMatchesService;
use crate::models::Team;
use crate::models_api::team_matches::ApiTeamMatchesState;
use crate::models_api::teams::ApiTeam;
use crate::team_matches_service::TeamMatchesService;
use crate::CONFIG;

#[derive(Clone)]
pub struct ApiState {
    pub team_matches_service: SafeApiTeamMatchesService,
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16, team_matches_service: SafeApiTeamMatchesService) {
        let state = ApiState { team_matches_service };
        let app = Router::new()
            .route("/teams", axum::routing::get(Api::get_teams))
            .route("/teams/:team_code", axum::routing::get(Api::get_team_matches))
            .route("/teams/:team_code/stats", axum::routing::get(Api::get_team_stats))

            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(CompressionLayer::new())
            );
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn root() -> &'static str {
        "Howzat"
    }

    async fn get_teams() -> Json<Vec<ApiTeam>> {
        Json(Team::get_all().iter().map(ApiTeam::from).collect())
    }

    async fn get_team_matches(Path(team_code): Path<String>, State(state): State<ApiState>) -> Response {
        let team: Team = match team_code.parse() {
            Ok(e) => e,
            Err(_) => return (StatusCode::NOT_FOUND, "404".to_string()).into_response(),
        };

        // refresh on every request, throttled by the rest cache
        let throttle = Some(Duration::from_secs(CONFIG.fetch_throttle_s));
        match TeamMatchesService::update(&team, throttle).await {
            Ok(rsp) => { state.team_matches_service.write().await.update(&team, &rsp); },
            Err(e) => {
                log::error!("[API] Fetch failed {team} {e:#}");
                state.team_matches_service.write().await.set_failed(&team, &format!("{e:#}"));
            },
        }

        Json(state.team_matches_service.read().await.read(&team)).into_response()
    }

    async fn get_team_stats(Path(team_code): Path<String>, State(state): State<ApiState>) -> Response {
        if let Ok(team) = team_code.parse::<Team>() {
            match state.team_matches_service.read().await.read(&team) {
                ApiTeamMatchesState::Loaded { data } => Json(data.stats).into_response(),
                // known team without data yet, not the same as an unknown code
                pending => (StatusCode::SERVICE_UNAVAILABLE, Json(pending)).into_response(),
            }
        } else {
            (StatusCode::NOT_FOUND, "404".to_string()).into_response()
        }
    }
}
