use std::process::{Child, Command};
use std::time::Duration;

use assert_cmd::prelude::CommandCargoExt;
use ipl_server_rs::config_handler::Config;
use ipl_server_rs::models_api::stats::ApiMatchStats;
use ipl_server_rs::models_api::team_matches::ApiTeamMatchesState;
use ipl_server_rs::models_api::teams::ApiTeam;
use reqwest::Response;

pub struct IplServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for IplServer {
    fn drop(&mut self) {
        if self.child_process.is_some() {
            self.child_process.as_mut().unwrap().kill()
                .expect("Should kill");
        }
    }
}

impl IplServer {
    pub fn new(port: u16) -> IplServer {
        IplServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, external_url: &str) {
        let config = Config {
            port: self.port,
            ipl_api_url: external_url.to_string(),
            db_path: format!("{}/db", path),
            refresh_interval_s: 600,
            fetch_throttle_s: 0,
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("ipl-server-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub async fn wait_until_up(&self) {
        for _ in 0..100 {
            if reqwest::get(self.get_url()).await.is_ok() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("server at {} never came up", self.get_url());
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn get_team_matches(&self, team_code: &str) -> Result<Response, reqwest::Error> {
        reqwest::get(format!("{}/teams/{}", self.get_url(), team_code)).await
    }

    pub async fn get_team_state(&self, team_code: &str) -> Result<ApiTeamMatchesState, Box<dyn std::error::Error>> {
        Ok(self.get_team_matches(team_code).await?.json().await?)
    }

    pub async fn get_team_stats(&self, team_code: &str) -> Result<Response, reqwest::Error> {
        reqwest::get(format!("{}/teams/{}/stats", self.get_url(), team_code)).await
    }

    pub async fn get_teams(&self) -> Result<Vec<ApiTeam>, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("{}/teams", self.get_url())).await?.json().await?)
    }

    pub async fn get_stats(&self, team_code: &str) -> Result<ApiMatchStats, Box<dyn std::error::Error>> {
        Ok(self.get_team_stats(team_code).await?.json().await?)
    }
}
