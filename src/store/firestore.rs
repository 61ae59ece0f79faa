use super::DocumentStore;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::http;
use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::{Value, json};

const COUNT_ALIAS: &str = "present";

/// Cloud Firestore over its REST API, using a structured count aggregation
/// so no document bodies are transferred.
pub struct FirestoreStore {
    base_url: String,
    project: String,
    api_key: Option<String>,
    client: Client,
}

impl FirestoreStore {
    pub fn new(base_url: &str, project: &str, api_key: Option<String>, timeout_secs: u64) -> AppResult<Self> {
        Ok(Self {
            base_url: base_url.to_string(),
            project: project.to_string(),
            api_key,
            client: http::client(timeout_secs)?,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let project = cfg.require_project()?;
        Self::new(
            &cfg.firestore_url,
            project,
            cfg.firestore_api_key.clone(),
            cfg.request_timeout_secs,
        )
    }

    fn query_url(&self) -> AppResult<reqwest::Url> {
        let mut url = http::endpoint(
            &self.base_url,
            &format!(
                "v1/projects/{}/databases/(default)/documents:runAggregationQuery",
                self.project
            ),
        )?;
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }
}

/// Body of a `runAggregationQuery` counting one day of a collection.
pub(crate) fn count_query(collection: &str, date: NaiveDate) -> Value {
    json!({
        "structuredAggregationQuery": {
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "date" },
                        "op": "EQUAL",
                        "value": { "stringValue": date.format("%Y-%m-%d").to_string() }
                    }
                }
            },
            "aggregations": [{ "alias": COUNT_ALIAS, "count": {} }]
        }
    })
}

/// Extract the count from a `runAggregationQuery` response stream.
/// Firestore encodes 64-bit integers as JSON strings.
pub(crate) fn parse_count(body: &Value) -> AppResult<u64> {
    let items = body
        .as_array()
        .ok_or_else(|| AppError::Store("aggregation response is not an array".into()))?;

    for item in items {
        if let Some(field) = item
            .pointer(&format!("/result/aggregateFields/{COUNT_ALIAS}/integerValue"))
        {
            return match field {
                Value::String(s) => s
                    .parse::<u64>()
                    .map_err(|e| AppError::Store(format!("bad count '{s}': {e}"))),
                Value::Number(n) => n
                    .as_u64()
                    .ok_or_else(|| AppError::Store(format!("bad count {n}"))),
                other => Err(AppError::Store(format!("bad count {other}"))),
            };
        }
    }

    // No result row at all: nothing matched.
    Ok(0)
}

impl DocumentStore for FirestoreStore {
    fn count_for_date(&self, collection: &str, date: NaiveDate) -> AppResult<u64> {
        let url = self.query_url()?;
        log::debug!("counting {collection} for {date}");

        let resp = self
            .client
            .post(url)
            .json(&count_query(collection, date))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(status_error(status, &self.project, text.trim()));
        }

        let body: Value = resp.json()?;
        parse_count(&body)
    }
}

/// Unknown collections come back as 200 with a zero count, so a 404 always
/// means the project or database itself is wrong.
fn status_error(status: StatusCode, project: &str, body: &str) -> AppError {
    if status == StatusCode::NOT_FOUND {
        AppError::Store(format!(
            "HTTP 404: project '{project}' or its default database was not found; check firestore_project ({body})"
        ))
    } else {
        AppError::Store(format!("HTTP {}: {}", status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_date_filtered_count_query() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let q = count_query("cls_morning_attendance", d);
        assert_eq!(
            q.pointer("/structuredAggregationQuery/structuredQuery/from/0/collectionId")
                .unwrap(),
            "cls_morning_attendance"
        );
        assert_eq!(
            q.pointer("/structuredAggregationQuery/structuredQuery/where/fieldFilter/value/stringValue")
                .unwrap(),
            "2025-01-09"
        );
    }

    #[test]
    fn parses_string_encoded_counts() {
        let body = json!([{
            "result": { "aggregateFields": { "present": { "integerValue": "12" } } },
            "readTime": "2025-01-09T10:00:00Z"
        }]);
        assert_eq!(parse_count(&body).unwrap(), 12);
        assert_eq!(parse_count(&json!([{ "readTime": "x" }])).unwrap(), 0);
        assert!(parse_count(&json!({})).is_err());
    }

    #[test]
    fn api_key_goes_into_the_query_string() {
        let store =
            FirestoreStore::new("https://fs.example.com/", "demo", Some("k1".into()), 5).unwrap();
        let url = store.query_url().unwrap();
        assert!(url.as_str().starts_with(
            "https://fs.example.com/v1/projects/demo/databases/(default)/documents:runAggregationQuery"
        ));
        assert_eq!(url.query(), Some("key=k1"));
    }

    #[test]
    fn not_found_points_at_the_project() {
        let err = status_error(StatusCode::NOT_FOUND, "typo", "{}");
        assert!(matches!(err, AppError::Store(ref m) if m.contains("typo") && m.contains("404")));

        let err = status_error(StatusCode::SERVICE_UNAVAILABLE, "demo", "down");
        assert_eq!(err.to_string(), "Database service error: HTTP 503: down");
    }
}
