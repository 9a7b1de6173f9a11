// src/core/net.rs
//
// HTTP(S) GET for the one-time dataset download. Blocking on purpose:
// callers run it on a worker thread (GUI) or directly (CLI).

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }

    let body = resp.text()?;
    logd!("Net: GET {} → {} ({} bytes)", url, status, body.len());
    Ok(body)
}
