use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single news article returned for a search term.
///
/// Items without a headline are dropped during decoding, so `title` is
/// always present; everything else is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline.
    pub title: String,
    /// Short summary, absent for some articles.
    pub description: Option<String>,
    /// Direct link to the article.
    pub url: Option<String>,
    /// Publishing outlet, e.g. "Reuters".
    pub source: Option<String>,
    /// Publication instant, when supplied and parseable.
    pub published_at: Option<DateTime<Utc>>,
}
