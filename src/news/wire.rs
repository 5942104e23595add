use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    /// "ok" on success, "error" with `code`/`message` on failure.
    pub(crate) status: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    #[allow(dead_code)]
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Option<Vec<ArticleNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) source: Option<SourceNode>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}
