//! Default endpoints and the outbound user agent, kept in one place.

/// Product token sent as the `User-Agent` on every request.
pub(crate) const USER_AGENT: &str = concat!("closingbell/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint. Every operation is selected via query
/// parameters, so there is nothing to join onto this URL.
pub(crate) const DEFAULT_BASE_PRICES: &str = "https://www.alphavantage.co/query";

/// NewsAPI v2 base. The operation name (e.g. `everything`) is joined on.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/";

/// Twilio REST base. The account-scoped path is joined on.
pub(crate) const DEFAULT_BASE_SMS: &str = "https://api.twilio.com/2010-04-01/";
