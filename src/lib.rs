//! Daily closing-price movement alerts.
//!
//! `closingbell` fetches a symbol's daily price series, compares the two
//! most recent closes, and when the move strictly exceeds a percentage
//! threshold it fetches related headlines and dispatches each one as an
//! SMS message.
//!
//! The library exposes one typed builder per provider call plus the
//! orchestration engine; the `closingbell` binary wires them to
//! environment configuration.
//!
//! # Example
//!
//! ```no_run
//! use closingbell::{AlertEngine, AlertOutcome, CbClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), closingbell::CbError> {
//! let client = CbClient::builder()
//!     .alpha_vantage_key("demo")
//!     .news_api_key("demo")
//!     .messaging_auth("ACxxxxxxxx", "auth-token")
//!     .build()?;
//!
//! let outcome = AlertEngine::new(&client, "NVDA", "NVIDIA")
//!     .sms_route("+15550001111", "+15550002222")
//!     .run()
//!     .await?;
//!
//! if let AlertOutcome::Dispatched { receipts, .. } = outcome {
//!     println!("sent {} messages", receipts.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod change;
pub mod config;
pub mod core;
pub mod news;
pub mod prices;
pub mod sms;

pub use crate::alert::{AlertEngine, AlertOutcome, ChangeReport};
pub use crate::change::{Direction, PriceChange, percentage_change};
pub use crate::config::Config;
pub use crate::core::{Backoff, CbClient, CbClientBuilder, CbError, RetryConfig};
pub use crate::news::{Article, NewsBuilder};
pub use crate::prices::{DailyBar, DailySeriesBuilder, OutputSize, PriceSeries};
pub use crate::sms::{MessageReceipt, SmsBuilder};
