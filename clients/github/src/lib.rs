mod builder;

pub use builder::{GithubClientBuilder, GITHUB_API_URL};

use anyhow::anyhow;
use async_trait::async_trait;
use commit_counts::api::{Endpoint, Error, Payload, Result, Source};
use log::debug;
use reqwest::Client;
use url::Url;

pub struct GithubClient {
    client: Client,
    github_url: Url,
}

impl GithubClient {
    fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.github_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be a base URL", self.github_url))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

#[async_trait]
impl Source for GithubClient {
    async fn get(&self, endpoint: &Endpoint) -> Result<Payload> {
        let request_url = self.endpoint_url(endpoint)?;
        debug!("GET {}", request_url);
        let transport = |err: reqwest::Error| Error::Transport {
            endpoint: endpoint.clone(),
            source: err.into(),
        };
        let response = self.client.get(request_url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        debug!("{} answered {} with {} bytes", endpoint, status, body.len());
        Ok(Payload::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use crate::GithubClientBuilder;
    use commit_counts::api::{Endpoint, Source};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn endpoint_url_keeps_base_path() {
        let client = GithubClientBuilder::default()
            .with_github_url("https://github.example.com/api/v3/")
            .build()
            .unwrap();
        let url = client.endpoint_url(&Endpoint::repo_commits("John567", "Triangle567")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.example.com/api/v3/repos/John567/Triangle567/commits"
        );
    }

    #[test]
    fn endpoint_url_escapes_segments() {
        let client = GithubClientBuilder::default().build().unwrap();
        let url = client.endpoint_url(&Endpoint::repo_commits("John567", "a/b c")).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/repos/John567/a%2Fb%20c/commits");
    }

    #[tokio::test]
    async fn returns_status_and_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/unknown_user/repos"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(r#"{"message": "Not Found"}"#, "application/json"))
            .expect(1)
            .mount(&server)
            .await;
        let client = GithubClientBuilder::default().with_github_url(server.uri()).build().unwrap();

        let payload = client.get(&Endpoint::user_repos("unknown_user")).await.unwrap();

        assert_eq!(payload.status, 404);
        assert_eq!(payload.body, r#"{"message": "Not Found"}"#);
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let client = GithubClientBuilder::default()
            .with_github_url("http://127.0.0.1:1")
            .build()
            .unwrap();

        let result = client.get(&Endpoint::user_repos("John567")).await;

        assert!(matches!(result, Err(commit_counts::api::Error::Transport { .. })));
    }
}
