use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const AGENT: &str = concat!("cricket_terminal/", env!("CARGO_PKG_VERSION"));

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// GET `url` and return the body, treating any non-2xx status as an error.
pub fn get_text(url: &str) -> Result<String> {
    let client = http_client()?;
    let resp = client
        .get(url)
        .header(USER_AGENT, AGENT)
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    check_status(status, body)
}

fn check_status(status: StatusCode, body: String) -> Result<String> {
    if !status.is_success() {
        return Err(anyhow!("http {}: {}", status, body));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_passes_body_through() {
        let body = check_status(StatusCode::OK, "{}".to_string()).expect("ok");
        assert_eq!(body, "{}");
    }

    #[test]
    fn non_success_carries_status_and_body() {
        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR, "oops".to_string())
            .expect_err("500 should error");
        assert_eq!(err.to_string(), "http 500 Internal Server Error: oops");

        let err = check_status(StatusCode::TOO_MANY_REQUESTS, String::new())
            .expect_err("429 should error");
        assert!(err.to_string().starts_with("http 429"));
    }
}
