//! Serde mappings for the daily time-series payload.
//!
//! The provider keys fields with numbered labels ("1. open", "4. close")
//! and serializes every number as a string, so everything here is renamed
//! and run through lenient deserializers before it touches the public
//! models.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
pub(crate) struct DailyEnvelope {
    #[serde(rename = "Meta Data")]
    pub(crate) meta: Option<MetaNode>,
    #[serde(rename = "Time Series (Daily)")]
    pub(crate) series: Option<BTreeMap<String, BarNode>>,
    // Provider-level notices arrive in place of the series.
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct MetaNode {
    #[serde(rename = "2. Symbol")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub(crate) last_refreshed: Option<String>,
    #[serde(rename = "5. Time Zone")]
    pub(crate) time_zone: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct BarNode {
    #[serde(rename = "1. open", default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) open: Option<f64>,
    #[serde(rename = "2. high", default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) high: Option<f64>,
    #[serde(rename = "3. low", default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) low: Option<f64>,
    #[serde(rename = "4. close", default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) close: Option<f64>,
    #[serde(
        rename = "5. volume",
        default,
        deserialize_with = "de_opt_u64_from_mixed"
    )]
    pub(crate) volume: Option<u64>,
}

/// Accepts a JSON number or a numeric string; null and absent become `None`.
fn de_opt_f64_from_mixed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Mixed {
        F64(f64),
        Str(String),
    }

    let v: Option<Mixed> = Option::deserialize(deserializer)?;
    match v {
        None => Ok(None),
        Some(Mixed::F64(f)) => Ok(Some(f)),
        Some(Mixed::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid f64 string: {s:?}"))),
    }
}

/// Same as above for whole-number fields (volume).
fn de_opt_u64_from_mixed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Mixed {
        U64(u64),
        Str(String),
    }

    let v: Option<Mixed> = Option::deserialize(deserializer)?;
    match v {
        None => Ok(None),
        Some(Mixed::U64(u)) => Ok(Some(u)),
        Some(Mixed::Str(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid u64 string: {s:?}"))),
    }
}
