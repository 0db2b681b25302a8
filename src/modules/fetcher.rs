use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};

use crate::modules::logger;
use crate::modules::types::FetchedRecord;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Fetch the record from [`DEFAULT_ENDPOINT`].
///
/// Best effort: any failure yields an empty record, never an error.
pub async fn fetch_remote_record() -> FetchedRecord {
    fetch_record_from(DEFAULT_ENDPOINT).await
}

/// Single GET against `url` with the client's default timeout and no retry.
///
/// Only a 200 with a JSON object body produces data. Other statuses,
/// transport errors, undecodable bodies and a client that cannot be built
/// all collapse to an empty record plus a notice.
pub async fn fetch_record_from(url: &str) -> FetchedRecord {
    let http_client = match Client::builder().build() {
        Ok(c) => c,
        Err(e) => {
            logger::warnln(format!("Note: HTTP client unavailable: {}", e));
            return FetchedRecord::default();
        }
    };

    let response = match http_client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            logger::warnln(format!("Error fetching data: {}", e));
            return FetchedRecord::default();
        }
    };

    if response.status() != StatusCode::OK {
        logger::warnln(format!(
            "Fetch from {} returned status {}; continuing without data",
            url,
            response.status()
        ));
        return FetchedRecord::default();
    }

    match response.json::<Map<String, Value>>().await {
        Ok(fields) => FetchedRecord::from(fields),
        Err(e) => {
            logger::warnln(format!("Error decoding response from {}: {}", url, e));
            FetchedRecord::default()
        }
    }
}
