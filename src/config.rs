//! Process configuration loaded from environment variables.
//!
//! Required:
//! - `ALPHAVANTAGE_API_KEY`: market-data provider key
//! - `NEWS_API_KEY`: news provider key
//! - `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN`: messaging credentials
//! - `TWILIO_FROM_NUMBER`: sender phone number
//! - `ALERT_RECIPIENT`: destination phone number
//!
//! Optional:
//! - `ALERT_SYMBOL`: ticker to watch (default `NVDA`)
//! - `ALERT_COMPANY`: news search term (default `NVIDIA`)

use crate::core::CbError;

const DEFAULT_SYMBOL: &str = "NVDA";
const DEFAULT_COMPANY: &str = "NVIDIA";

/// Everything the alert binary needs from its environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub alpha_vantage_key: String,
    pub news_api_key: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from: String,
    pub alert_recipient: String,
    pub symbol: String,
    pub company: String,
}

impl Config {
    /// Loads the configuration, reporting every missing variable at once.
    ///
    /// Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CbError::Config`] naming each required variable missing
    /// from the environment.
    pub fn from_env() -> Result<Self, CbError> {
        let mut missing: Vec<&'static str> = Vec::new();

        let alpha_vantage_key = require_var("ALPHAVANTAGE_API_KEY", &mut missing);
        let news_api_key = require_var("NEWS_API_KEY", &mut missing);
        let twilio_account_sid = require_var("TWILIO_ACCOUNT_SID", &mut missing);
        let twilio_auth_token = require_var("TWILIO_AUTH_TOKEN", &mut missing);
        let twilio_from = require_var("TWILIO_FROM_NUMBER", &mut missing);
        let alert_recipient = require_var("ALERT_RECIPIENT", &mut missing);

        if !missing.is_empty() {
            return Err(CbError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            alpha_vantage_key,
            news_api_key,
            twilio_account_sid,
            twilio_auth_token,
            twilio_from,
            alert_recipient,
            symbol: non_empty_var("ALERT_SYMBOL").unwrap_or_else(|| DEFAULT_SYMBOL.to_owned()),
            company: non_empty_var("ALERT_COMPANY").unwrap_or_else(|| DEFAULT_COMPANY.to_owned()),
        })
    }
}

fn require_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    non_empty_var(name).unwrap_or_else(|| {
        missing.push(name);
        String::new()
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
