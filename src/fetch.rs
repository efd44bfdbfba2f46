//! Blocking HTTP fetch for the work-order listing.

use std::time::Duration;

use log::debug;
use ureq::Agent;

use crate::error::WorkOrderError;

/// Default endpoint for the project work-orders listing.
pub const API_URL: &str = "https://app.innergy.com/api/projectWorkOrders";

/// Global timeout for the request. Large listings can take the server a
/// while to produce.
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// Maximum response body size (16 MB).
const MAX_RESPONSE_SIZE: u64 = 16 * 1024 * 1024;

/// Creates an HTTP agent with the global timeout applied.
///
/// The agent owns all connection state for one fetch and is dropped on every
/// exit path, successful or not.
fn agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

/// Performs one GET against `url` and returns the raw response body.
///
/// Sends `Accept: application/json` and the `Api-Key` header. A non-2xx
/// status or transport failure becomes a [`WorkOrderError`]; the body is
/// read as text under a 16 MB cap and handed back without any syntax
/// checking, since downstream rendering is purely text-level.
pub fn work_orders(url: &str, api_key: &str) -> Result<String, WorkOrderError> {
    debug!("GET {}", url);

    let response = agent()
        .get(url)
        .header("Accept", "application/json")
        .header("Api-Key", api_key)
        .call()
        .map_err(|err| match err {
            ureq::Error::StatusCode(code) => {
                WorkOrderError::new("Failed to fetch work orders", Some(code))
            }
            other => {
                WorkOrderError::simple(format!("Failed to fetch work orders: {}", other))
            }
        })?;

    let body = response
        .into_body()
        .with_config()
        .limit(MAX_RESPONSE_SIZE)
        .read_to_string()
        .map_err(|err| {
            WorkOrderError::simple(format!("Failed to read response body: {}", err))
        })?;

    debug!("received {} bytes", body.len());
    Ok(body)
}
