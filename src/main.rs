use std::time::Duration;

use futures::future::join_all;
use tracing::log;

use ipl_server_rs::api::Api;
use ipl_server_rs::api_team_matches_service::{ApiTeamMatchesService, SafeApiTeamMatchesService};
use ipl_server_rs::models::Team;
use ipl_server_rs::team_matches_service::TeamMatchesService;
use ipl_server_rs::CONFIG;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "debug,hyper=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let team_matches_service = ApiTeamMatchesService::new();

    // warm every team before serving, cached responses are good enough here
    for team in Team::get_all() {
        update_team(&team, None, &team_matches_service).await;
    }

    let h1 = {
        let team_matches_service = team_matches_service.clone();
        tokio::spawn(async { Api::serve(CONFIG.port, team_matches_service).await })
    };
    let h2 = {
        let team_matches_service = team_matches_service.clone();
        tokio::spawn(async { handle_refresh_loop(team_matches_service).await })
    };

    join_all(vec![h1, h2]).await;
}

async fn handle_refresh_loop(team_matches_service: SafeApiTeamMatchesService) {
    let throttle = Some(Duration::from_secs(CONFIG.fetch_throttle_s));
    loop {
        tokio::time::sleep(Duration::from_secs(CONFIG.refresh_interval_s)).await;
        for team in Team::get_all() {
            update_team(&team, throttle, &team_matches_service).await;
        }
    }
}

async fn update_team(team: &Team, throttle: Option<Duration>, team_matches_service: &SafeApiTeamMatchesService) {
    match TeamMatchesService::update(team, throttle).await {
        Ok(rsp) => {
            team_matches_service.write().await.update(team, &rsp);
        },
        Err(e) => {
            log::error!("[LOOP] Fetch failed {team} {e:#}");
            team_matches_service.write().await.set_failed(team, &format!("{e:#}"));
        },
    }
}
