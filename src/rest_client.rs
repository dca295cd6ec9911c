use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::log;

use crate::db::Db;
use crate::models::Team;
use crate::CONFIG;

pub fn get_team_matches_url(team: &Team) -> String {
    format!("{}/{}", CONFIG.ipl_api_url, team)
}

pub async fn throttle_call<T: DeserializeOwned + Serialize>(url: &str, throttle_s: Option<Duration>) -> Result<T> {
    let db = Db::<String, T>::new("rest");

    if db.is_stale(&url.to_string(), throttle_s) {
        match get_call(url).await {
            Ok(rsp) => {
                _ = db.write(&url.to_string(), &rsp);
                Ok(rsp)
            }
            // upstream down => fall back to the last stored response if any
            Err(e) => db.read(&url.to_string()).map(Ok).unwrap_or(Err(e)),
        }
    } else {
        match db.read(&url.to_string()) {
            Some(rsp) => Ok(rsp),
            None => get_call(url).await,
        }
    }
}

async fn get_call<T: DeserializeOwned>(url: &str) -> Result<T> {
    let before = Instant::now();
    let rsp = reqwest::get(url).await
        .with_context(|| format!("Call failed {url}"))?
        .error_for_status()
        .with_context(|| format!("Error status {url}"))?;
    let res = rsp.json().await
        .with_context(|| format!("Parse failed {url}"))?;
    log::info!("[REST] Call {url} {:.2?}", before.elapsed());
    Ok(res)
}
