use crate::data::DataError;
use serde::{Deserialize, Serialize};

const PROFILE_ENDPOINT: &str = "https://api.github.com/users";

/// Read-only slice of the GitHub user payload rendered on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubProfile {
    pub public_repos: u64,
    pub public_gists: u64,
    pub followers: u64,
    pub following: u64,
}

/// Single GET against the profile API; no retry, no caching.
pub async fn fetch_github_profile(
    client: &reqwest::Client,
    username: &str,
) -> Result<GithubProfile, DataError> {
    let url = format!("{PROFILE_ENDPOINT}/{username}");

    // The GitHub API rejects requests without a User-Agent.
    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, "portfolio-tui")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(DataError::Status(response.status()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_fields_we_render() {
        let payload = r#"{
            "login": "ArtienVoskanian",
            "public_repos": 12,
            "public_gists": 3,
            "followers": 7,
            "following": 9,
            "bio": null
        }"#;

        let profile: GithubProfile = serde_json::from_str(payload).unwrap();
        assert_eq!(
            profile,
            GithubProfile {
                public_repos: 12,
                public_gists: 3,
                followers: 7,
                following: 9,
            }
        );
    }
}
