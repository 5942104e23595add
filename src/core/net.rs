/// Reads a response body to a string.
///
/// Every provider module funnels bodies through here so the read is traced
/// in one place.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &'static str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::trace!(endpoint, bytes = text.len(), "response body read");
    Ok(text)
}
