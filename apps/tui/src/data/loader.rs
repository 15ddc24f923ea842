use crate::domain::Project;
use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong between a dataset source and a parsed
/// project list. Callers log and degrade; nothing here is fatal to the app.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset is not an array of project records")]
    Shape,
}

fn is_url(source: &str) -> bool {
    let lower = source.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetches the raw JSON document from a URL or a local path.
async fn fetch_json(client: &reqwest::Client, source: &str) -> Result<Value, DataError> {
    if is_url(source) {
        let response = client.get(source).send().await?;
        if !response.status().is_success() {
            return Err(DataError::Status(response.status()));
        }
        Ok(response.json().await?)
    } else {
        let contents = std::fs::read_to_string(source)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Parses the document into project records. The document must be a JSON
/// array; beyond that, only the optional-field defaults apply.
pub fn parse_projects(value: Value) -> Result<Vec<Project>, DataError> {
    let Value::Array(entries) = value else {
        return Err(DataError::Shape);
    };

    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(DataError::Parse))
        .collect()
}

/// Loads and parses the project dataset from the configured source.
pub async fn load_projects(
    client: &reqwest::Client,
    source: &str,
) -> Result<Vec<Project>, DataError> {
    let document = fetch_json(client, source).await?;
    parse_projects(document)
}
