//! News proxy: a thin pass-through to an external headline source.
//!
//! Out of core scope; no game logic depends on it. Upstream failures are
//! reported in-band as an error-status envelope rather than an HTTP error,
//! so the feed degrades to an empty list.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use uuid::Uuid;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

fn default_language() -> String {
    "en".to_string()
}

fn default_news_base_url() -> String {
    "https://newsdata.io/api/1/news".to_string()
}

/// Request for a category of headlines.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct NewsRequest {
    /// UI category (sports, esports, international, national, politics, tech).
    category: String,
    /// Two-letter language code.
    #[serde(default = "default_language")]
    language: String,
}

/// One headline reshaped for the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Upstream article id, or a generated one.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Summary text.
    pub description: String,
    /// Link to the full article.
    pub url: String,
    /// Image URL, possibly empty.
    pub image: String,
    /// Publishing outlet.
    pub source: String,
    /// Publication timestamp as reported upstream.
    pub published: String,
    /// The requested category, echoed back.
    pub category: String,
}

/// Envelope returned to the caller; `status` is `"success"` or `"error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
    /// Headlines, empty on failure.
    pub articles: Vec<Article>,
    /// `"success"` or `"error"`.
    pub status: String,
    /// Failure description when `status` is `"error"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewsResponse {
    fn success(articles: Vec<Article>) -> Self {
        Self {
            articles,
            status: "success".to_string(),
            message: None,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            articles: Vec::new(),
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

/// Configuration for the news proxy.
#[derive(Debug, Clone, Getters)]
pub struct NewsConfig {
    /// Upstream API key; without one every request degrades to an error
    /// envelope.
    api_key: Option<String>,
    /// Upstream endpoint.
    base_url: String,
}

impl NewsConfig {
    /// Creates a config with the default upstream endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: default_news_base_url(),
        }
    }

    /// Overrides the upstream endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Fetches and reshapes headlines from the upstream source.
#[derive(Debug, Clone)]
pub struct NewsClient {
    config: NewsConfig,
    http: reqwest::Client,
}

impl NewsClient {
    /// Creates a client for the given config.
    pub fn new(config: NewsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Fetches headlines for the requested category.
    ///
    /// Never fails outward: upstream errors, bad payloads, and a missing
    /// API key all come back as an error-status envelope.
    #[instrument(skip(self), fields(category = %request.category()))]
    pub async fn fetch(&self, request: &NewsRequest) -> NewsResponse {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("news api key not configured");
            return NewsResponse::failure("news api key not configured");
        };

        let upstream_category = map_category(request.category());
        let result = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("apikey", api_key),
                ("category", upstream_category),
                ("language", request.language().as_str()),
                ("size", "10"),
            ])
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "news upstream request failed");
                return NewsResponse::failure(e.to_string());
            }
        };

        if !response.status().is_success() {
            error!(status = %response.status(), "news upstream returned an error");
            return NewsResponse::failure("failed to fetch news");
        }

        match response.json::<Value>().await {
            Ok(payload) => {
                let articles = reshape_articles(&payload, request.category());
                debug!(count = articles.len(), "news fetched");
                NewsResponse::success(articles)
            }
            Err(e) => {
                error!(error = %e, "news upstream payload was not json");
                NewsResponse::failure(e.to_string())
            }
        }
    }
}

/// Maps UI categories onto the upstream's category set. The upstream has
/// no esports category, so esports rides on technology.
fn map_category(category: &str) -> &'static str {
    match category {
        "sports" => "sports",
        "esports" => "technology",
        "international" => "world",
        "national" => "domestic",
        "politics" => "politics",
        "tech" => "technology",
        _ => "general",
    }
}

/// Pulls the fields the front-end renders out of the upstream payload,
/// tolerating missing ones.
fn reshape_articles(payload: &Value, category: &str) -> Vec<Article> {
    let text = |article: &Value, key: &str, fallback: &str| -> String {
        article
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    };

    payload
        .get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .map(|article| Article {
                    id: article
                        .get("article_id")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    title: text(article, "title", "No title"),
                    description: text(article, "description", "No description available"),
                    url: text(article, "link", ""),
                    image: text(article, "image_url", ""),
                    source: text(article, "source_name", "Unknown"),
                    published: text(article, "pubDate", ""),
                    category: category.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
