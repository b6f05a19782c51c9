//! OMDb title search adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::http::{endpoint, get_text, snippet};
use crate::config::{MoviesConfig, SecureString, OMDB_KEY_ENV};

/// OMDb serves search results in fixed pages of ten.
pub const RESULTS_PER_PAGE: u32 = 10;

/// Media type filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    All,
    Movie,
    Series,
    Episode,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::All,
        MediaType::Movie,
        MediaType::Series,
        MediaType::Episode,
    ];

    /// Value of the `type` query parameter; `None` means unfiltered.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            MediaType::All => None,
            MediaType::Movie => Some("movie"),
            MediaType::Series => Some("series"),
            MediaType::Episode => Some("episode"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::All => "All Types",
            MediaType::Movie => "Movies",
            MediaType::Series => "TV Series",
            MediaType::Episode => "Episodes",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One search request as issued by the movie container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub title: String,
    /// 1-based page number.
    pub page: u32,
    pub year: Option<String>,
    pub kind: MediaType,
}

/// Summary record for one search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    pub year: String,
    /// `None` when upstream reports "N/A".
    pub poster: Option<String>,
    /// Upstream type tag ("movie", "series", "episode", ...).
    pub kind: String,
    pub imdb_id: String,
}

impl MovieSummary {
    pub fn imdb_url(&self) -> String {
        format!("https://www.imdb.com/title/{}", self.imdb_id)
    }
}

/// One page of search results plus the server-reported totals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieSearchPage {
    pub movies: Vec<MovieSummary>,
    pub total_results: u32,
    pub total_pages: u32,
}

/// Port for movie searches.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn search(&self, query: &MovieQuery) -> Result<MovieSearchPage, ApiError>;
}

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl OmdbClient {
    pub fn new(client: Client, config: &MoviesConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().map(SecureString::new),
        }
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn search(&self, query: &MovieQuery) -> Result<MovieSearchPage, ApiError> {
        let Some(api_key) = &self.api_key else {
            return Err(ApiError::NotConfigured {
                service: "OMDb",
                hint: OMDB_KEY_ENV,
            });
        };

        let page = query.page.max(1).to_string();
        let mut params = vec![
            ("s", query.title.as_str()),
            ("page", page.as_str()),
            ("apikey", api_key.expose()),
        ];
        if let Some(year) = query.year.as_deref().filter(|y| !y.trim().is_empty()) {
            params.push(("y", year));
        }
        if let Some(kind) = query.kind.as_param() {
            params.push(("type", kind));
        }

        let url = endpoint(&self.base_url, "/", &params)?;
        let (status, body) = get_text(&self.client, "movies", url).await?;

        let raw: RawSearch = match serde_json::from_str(&body) {
            Ok(raw) => raw,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Upstream {
                    status: status.as_u16(),
                    message: snippet(&body),
                })
            }
            Err(e) => return Err(ApiError::Decode(e.to_string())),
        };

        raw.into_page(status.as_u16())
    }
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<RawMovie>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl RawSearch {
    fn into_page(self, status: u16) -> Result<MovieSearchPage, ApiError> {
        if !self.response.eq_ignore_ascii_case("true") {
            let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
            // "Movie not found!" / "Series not found!" are empty results.
            if message.to_ascii_lowercase().ends_with("not found!") {
                return Ok(MovieSearchPage::default());
            }
            let status = if (200..300).contains(&status) { 400 } else { status };
            return Err(ApiError::Upstream { status, message });
        }

        let total_results = self
            .total_results
            .as_deref()
            .and_then(|t| t.trim().parse::<u32>().ok())
            .unwrap_or(self.search.len() as u32);

        let movies = self
            .search
            .into_iter()
            .map(|m| MovieSummary {
                title: m.title,
                year: m.year,
                poster: m
                    .poster
                    .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("N/A")),
                kind: m.kind,
                imdb_id: m.imdb_id,
            })
            .collect();

        Ok(MovieSearchPage {
            movies,
            total_results,
            total_pages: total_results.div_ceil(RESULTS_PER_PAGE),
        })
    }
}
