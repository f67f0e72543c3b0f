use crate::GithubClient;
use anyhow::anyhow;
use commit_counts::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use url::Url;

pub const GITHUB_API_URL: &str = "https://api.github.com";

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    github_url: String,
    headers: HeaderMap,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        // GitHub rejects requests without a user agent
        headers.insert(header::USER_AGENT, HeaderValue::from_static("repo-commits"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        Self {
            client_builder: ClientBuilder::default(),
            github_url: GITHUB_API_URL.to_string(),
            headers,
        }
    }
}

impl GithubClientBuilder {
    pub fn try_with_token(self, token: &secrecy::SecretString) -> Result<GithubClientBuilder> {
        let value = format!("token {}", token.expose_secret());
        let builder = self.try_with_header(header::AUTHORIZATION, value)?;
        Ok(builder)
    }

    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_github_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.github_url = url.as_ref().to_string();
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let mut val = HeaderValue::from_str(val.as_ref())?;
        if key == header::AUTHORIZATION {
            val.set_sensitive(true);
        }
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<GithubClient> {
        let github_url = Url::parse(&self.github_url).map_err(|err| anyhow!("Invalid API URL {}: {}", self.github_url, err))?;
        if github_url.cannot_be_a_base() {
            return Err(anyhow!("Invalid API URL {}: cannot be a base", self.github_url).into());
        }
        let client = self
            .client_builder
            .default_headers(self.headers)
            .build()
            .map_err(anyhow::Error::from)?;
        Ok(GithubClient { client, github_url })
    }
}
