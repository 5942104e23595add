use crate::{
    core::{CbClient, CbError, client::RetryConfig, error::status_error, net},
    sms::{
        model::MessageReceipt,
        wire::{ApiErrorNode, MessageNode},
    },
};

const PROVIDER: &str = "Twilio";

pub(super) async fn send_message(
    client: &CbClient,
    from: &str,
    to: &str,
    body: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<MessageReceipt, CbError> {
    let auth = client.sms_auth()?.clone();

    let url = client
        .base_sms()
        .join(&format!("Accounts/{}/Messages.json", auth.account_sid))?;

    let params = [("From", from), ("To", to), ("Body", body)];
    let req = client
        .http()
        .post(url.clone())
        .basic_auth(&auth.account_sid, Some(&auth.auth_token))
        .form(&params);

    let resp = client.send_with_retry(req, retry_override).await?;
    let status = resp.status();
    if !status.is_success() {
        // Rejections usually carry a JSON body naming the exact problem;
        // pass that through instead of the bare status when present.
        let text = net::get_text(resp, "sms_send").await.unwrap_or_default();
        if let Ok(node) = serde_json::from_str::<ApiErrorNode>(&text)
            && (node.code.is_some() || node.message.is_some())
        {
            let code = node
                .code
                .map_or_else(|| "unknown".to_owned(), |c| c.to_string());
            return Err(CbError::Api {
                provider: PROVIDER,
                message: format!("{code}: {}", node.message.unwrap_or_default()),
            });
        }
        return Err(status_error(status.as_u16(), url.to_string()));
    }

    let text = net::get_text(resp, "sms_send").await?;
    let node: MessageNode = serde_json::from_str(&text).map_err(CbError::Json)?;
    let sid = node
        .sid
        .ok_or_else(|| CbError::Data("missing message sid in acceptance body".into()))?;

    tracing::debug!(sid = %sid, status = ?node.status, "message accepted");
    Ok(MessageReceipt {
        sid,
        status: node.status,
    })
}
