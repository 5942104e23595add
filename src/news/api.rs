use chrono::{DateTime, Utc};

use crate::{
    core::{CbClient, CbError, client::RetryConfig, error::status_error, net},
    news::{model::Article, wire::NewsEnvelope},
};

const PROVIDER: &str = "NewsAPI";

pub(super) async fn fetch_everything(
    client: &CbClient,
    query: &str,
    limit: Option<usize>,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Article>, CbError> {
    let apikey = client.news_key()?.to_owned();

    let mut url = client.base_news().join("everything")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("apiKey", &apikey);

    let resp = client
        .send_with_retry(client.http().get(url.clone()), retry_override)
        .await?;
    if !resp.status().is_success() {
        return Err(status_error(resp.status().as_u16(), url.to_string()));
    }

    let body = net::get_text(resp, "news_everything").await?;
    decode_everything(&body, limit)
}

fn decode_everything(body: &str, limit: Option<usize>) -> Result<Vec<Article>, CbError> {
    let envelope: NewsEnvelope = serde_json::from_str(body).map_err(CbError::Json)?;

    if envelope.status.as_deref() == Some("error") {
        let code = envelope.code.unwrap_or_else(|| "unknown".to_owned());
        let message = envelope.message.unwrap_or_default();
        return Err(CbError::Api {
            provider: PROVIDER,
            message: format!("{code}: {message}"),
        });
    }

    let nodes = envelope
        .articles
        .ok_or_else(|| CbError::Data("missing articles array".into()))?;

    let mut articles: Vec<Article> = nodes
        .into_iter()
        .filter_map(|node| {
            // An item without a headline is useless downstream.
            let title = node.title?;
            Some(Article {
                title,
                description: node.description,
                url: node.url,
                source: node.source.and_then(|s| s.name),
                published_at: node.published_at.as_deref().and_then(parse_instant),
            })
        })
        .collect();

    if let Some(limit) = limit {
        articles.truncate(limit);
    }

    Ok(articles)
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
