use crate::{
    core::{CbClient, CbError, client::RetryConfig, error::status_error, net},
    prices::{
        OutputSize,
        model::{DailyBar, PriceSeries, SeriesMeta},
        wire::DailyEnvelope,
    },
};

const PROVIDER: &str = "Alpha Vantage";

pub(super) async fn fetch_daily(
    client: &CbClient,
    symbol: &str,
    output_size: Option<OutputSize>,
    retry_override: Option<&RetryConfig>,
) -> Result<PriceSeries, CbError> {
    let apikey = client.alpha_key()?.to_owned();

    let mut url = client.base_prices().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("function", "TIME_SERIES_DAILY");
        qp.append_pair("symbol", symbol);
        if let Some(size) = output_size {
            qp.append_pair("outputsize", size.as_str());
        }
        qp.append_pair("apikey", &apikey);
    }

    let resp = client
        .send_with_retry(client.http().get(url.clone()), retry_override)
        .await?;
    if !resp.status().is_success() {
        return Err(status_error(resp.status().as_u16(), url.to_string()));
    }

    let body = net::get_text(resp, "prices_daily").await?;
    decode_daily(symbol, &body)
}

fn decode_daily(symbol: &str, body: &str) -> Result<PriceSeries, CbError> {
    let envelope: DailyEnvelope = serde_json::from_str(body).map_err(CbError::Json)?;

    if let Some(message) = envelope.error_message {
        return Err(CbError::Api {
            provider: PROVIDER,
            message,
        });
    }
    // Throttle and plan notices arrive with a 200 in place of the payload.
    if let Some(message) = envelope.note.or(envelope.information) {
        return Err(CbError::Api {
            provider: PROVIDER,
            message,
        });
    }

    let series = envelope
        .series
        .ok_or_else(|| CbError::Data("missing \"Time Series (Daily)\" object".into()))?;

    let mut bars = Vec::with_capacity(series.len());
    for (key, node) in series {
        let date = key
            .parse::<chrono::NaiveDate>()
            .map_err(|_| CbError::Data(format!("unparseable series date key: {key:?}")))?;
        let close = node
            .close
            .ok_or_else(|| CbError::Data(format!("missing close for {key}")))?;
        bars.push(DailyBar {
            date,
            close,
            open: node.open,
            high: node.high,
            low: node.low,
            volume: node.volume,
        });
    }
    // Receipt order is untrusted; the newest session must come first.
    bars.sort_by(|a, b| b.date.cmp(&a.date));

    let meta = envelope.meta.map(|m| SeriesMeta {
        symbol: m.symbol,
        last_refreshed: m.last_refreshed,
        time_zone: m.time_zone,
    });

    Ok(PriceSeries {
        symbol: symbol.to_owned(),
        meta,
        bars,
    })
}
