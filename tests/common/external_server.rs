use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{extract::{Path, State}, response::IntoResponse, routing::get, Json, Router};
use ipl_server_rs::models::Team;
use ipl_server_rs::models_external::team_matches::TeamMatchesRsp;
use reqwest::StatusCode;
use tokio::{sync::RwLock, task::JoinHandle};

type SafeTeams = Arc<RwLock<HashMap<String, TeamMatchesRsp>>>;

/// In-process stand-in for the upstream IPL matches API.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,

    teams: SafeTeams,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![], teams: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub async fn start(&mut self) {
        let external_mock = {
            let port = self.port;
            let state = self.teams.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_secs(2)).await; // wait for mock to start
    }

    pub async fn add_team(&mut self, team: Team, rsp: TeamMatchesRsp) {
        self.teams.write().await.insert(team.to_string(), rsp);
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(state: SafeTeams, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/:team_code", get(ExternalServer::get_team_matches))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_team_matches(Path(team_code): Path<String>, State(state): State<SafeTeams>) -> impl IntoResponse {
        match state.read().await.get(&team_code) {
            Some(rsp) => Json(rsp.clone()).into_response(),
            None => (StatusCode::NOT_FOUND, "404".to_string()).into_response(),
        }
    }
}
