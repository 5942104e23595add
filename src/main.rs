use closingbell::alert::{AlertEngine, AlertOutcome};
use closingbell::config::Config;
use closingbell::core::{CbClient, CbError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CbError> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let client = CbClient::builder()
        .alpha_vantage_key(config.alpha_vantage_key.as_str())
        .news_api_key(config.news_api_key.as_str())
        .messaging_auth(
            config.twilio_account_sid.as_str(),
            config.twilio_auth_token.as_str(),
        )
        .build()?;

    let engine = AlertEngine::new(&client, config.symbol.as_str(), config.company.as_str())
        .sms_route(config.twilio_from.as_str(), config.alert_recipient.as_str());

    match engine.run().await? {
        AlertOutcome::InsufficientData { available } => {
            println!("Not enough daily closes to compare (got {available}).");
        }
        AlertOutcome::Held { report } => {
            print!("{report}");
            println!("No significant change in closing price; nothing sent.");
        }
        AlertOutcome::Dispatched { report, receipts } => {
            print!("{report}");
            println!("Significant change detected; headlines sent by SMS.");
            for receipt in &receipts {
                println!("Message sent: {}", receipt.sid);
            }
        }
    }

    Ok(())
}
