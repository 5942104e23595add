use closingbell::{AlertEngine, AlertOutcome, CbError, Direction};
use httpmock::Method::POST;

const SYMBOL: &str = "NVDA";
const COMPANY: &str = "NVIDIA";
const FROM: &str = "+15550001111";
const TO: &str = "+15550002222";

/// Two-session daily body with the given closes, newest first.
fn daily_body(latest: f64, previous: f64) -> String {
    format!(
        r#"{{
            "Meta Data": {{ "2. Symbol": "{SYMBOL}" }},
            "Time Series (Daily)": {{
                "2024-01-08": {{ "4. close": "{latest}" }},
                "2024-01-05": {{ "4. close": "{previous}" }}
            }}
        }}"#
    )
}

fn news_body(titles: &[&str]) -> String {
    let articles: Vec<String> = titles
        .iter()
        .map(|t| format!(r#"{{"title": "{t}", "description": "About {t}"}}"#))
        .collect();
    format!(
        r#"{{"status": "ok", "totalResults": {}, "articles": [{}]}}"#,
        titles.len(),
        articles.join(",")
    )
}

fn engine(client: &closingbell::CbClient) -> AlertEngine {
    AlertEngine::new(client, SYMBOL, COMPANY).sms_route(FROM, TO)
}

#[tokio::test]
async fn a_move_within_the_threshold_sends_nothing() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(500.0, 480.0));
    let news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a", "b", "c"]));
    let sms = crate::common::mock_sms_accept(&server, "SM777");
    let client = crate::common::test_client(&server);

    let report = match engine(&client).run().await.unwrap() {
        AlertOutcome::Held { report } => report,
        other => panic!("expected held outcome, got {other:?}"),
    };

    assert!((report.change.percent - 4.166_666_666_666_667).abs() < 1e-9);
    assert_eq!(report.change.delta, 20.0);
    assert_eq!(report.change.direction(), Direction::Up);

    news.assert_hits(0);
    sms.assert_hits(0);
}

/// Accepts only the exact form body for the given headline, answering with
/// a distinct sid so receipt order proves dispatch order.
fn mock_sms_for_headline<'a>(
    server: &'a httpmock::MockServer,
    title: &str,
    sid: &'a str,
) -> httpmock::Mock<'a> {
    let form = format!(
        "From=%2B15550001111&To=%2B15550002222&Body=Headline%3A+{title}%0ADescription%3A+About+{title}"
    );
    server.mock(move |when, then| {
        when.method(POST)
            .path(format!(
                "/2010-04-01/Accounts/{}/Messages.json",
                crate::common::TEST_ACCOUNT_SID
            ))
            .body(form.clone());
        then.status(201)
            .header("content-type", "application/json")
            .body(format!(r#"{{"sid": "{sid}", "status": "queued"}}"#));
    })
}

#[tokio::test]
async fn a_move_past_the_threshold_dispatches_the_first_three_headlines() {
    let server = crate::common::setup_server();
    let prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(550.0, 480.0));
    let news = crate::common::mock_news_with_body(
        &server,
        COMPANY,
        news_body(&["one", "two", "three", "four", "five"]),
    );
    let sms_one = mock_sms_for_headline(&server, "one", "SM1");
    let sms_two = mock_sms_for_headline(&server, "two", "SM2");
    let sms_three = mock_sms_for_headline(&server, "three", "SM3");
    let client = crate::common::test_client(&server);

    let (report, receipts) = match engine(&client).run().await.unwrap() {
        AlertOutcome::Dispatched { report, receipts } => (report, receipts),
        other => panic!("expected dispatched outcome, got {other:?}"),
    };

    assert!((report.change.percent - 14.583_333_333_333_334).abs() < 1e-9);
    assert_eq!(report.change.delta, 70.0);

    prices.assert();
    news.assert();
    sms_one.assert();
    sms_two.assert();
    sms_three.assert();

    // The first three articles, one message each, in provider order.
    let sids: Vec<&str> = receipts.iter().map(|r| r.sid.as_str()).collect();
    assert_eq!(sids, vec!["SM1", "SM2", "SM3"]);
}

#[tokio::test]
async fn dispatched_messages_carry_headline_and_description() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(550.0, 480.0));
    let _news = crate::common::mock_news_with_body(
        &server,
        COMPANY,
        r#"{"status": "ok", "articles": [{"title": "Up big", "description": "Shares jumped"}]}"#
            .to_string(),
    );
    // Exact form body, including the encoded newline between the two lines.
    let sms = server.mock(|when, then| {
        when.method(POST)
            .path(format!(
                "/2010-04-01/Accounts/{}/Messages.json",
                crate::common::TEST_ACCOUNT_SID
            ))
            .header("authorization", crate::common::TEST_BASIC_AUTH)
            .body("From=%2B15550001111&To=%2B15550002222&Body=Headline%3A+Up+big%0ADescription%3A+Shares+jumped");
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"sid": "SM900", "status": "queued"}"#);
    });
    let client = crate::common::test_client(&server);

    let receipts = match engine(&client).run().await.unwrap() {
        AlertOutcome::Dispatched { receipts, .. } => receipts,
        other => panic!("expected dispatched outcome, got {other:?}"),
    };

    sms.assert();
    assert_eq!(receipts[0].sid, "SM900");
}

#[tokio::test]
async fn fewer_headlines_than_the_limit_still_dispatches_them_all() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(550.0, 480.0));
    let _news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["one", "two"]));
    let sms = crate::common::mock_sms_accept(&server, "SM777");
    let client = crate::common::test_client(&server);

    let receipts = match engine(&client).run().await.unwrap() {
        AlertOutcome::Dispatched { receipts, .. } => receipts,
        other => panic!("expected dispatched outcome, got {other:?}"),
    };

    sms.assert_hits(2);
    assert_eq!(receipts.len(), 2);
}

#[tokio::test]
async fn a_single_session_short_circuits_before_news() {
    let server = crate::common::setup_server();
    let body = r#"{
        "Meta Data": { "2. Symbol": "NVDA" },
        "Time Series (Daily)": {
            "2024-01-08": { "4. close": "522.53" }
        }
    }"#;
    let prices = crate::common::mock_daily_series_with_body(&server, SYMBOL, body.to_string());
    let news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a"]));
    let sms = crate::common::mock_sms_accept(&server, "SM777");
    let client = crate::common::test_client(&server);

    let outcome = engine(&client).run().await.unwrap();

    assert_eq!(outcome, AlertOutcome::InsufficientData { available: 1 });
    prices.assert();
    news.assert_hits(0);
    sms.assert_hits(0);
}

#[tokio::test]
async fn a_flat_day_is_held_with_a_flat_direction() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(480.0, 480.0));
    let news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a"]));
    let client = crate::common::test_client(&server);

    let report = match engine(&client).run().await.unwrap() {
        AlertOutcome::Held { report } => report,
        other => panic!("expected held outcome, got {other:?}"),
    };

    assert_eq!(report.change.percent, 0.0);
    assert_eq!(report.change.direction(), Direction::Flat);
    news.assert_hits(0);
}

#[tokio::test]
async fn a_move_of_exactly_the_threshold_is_held() {
    let server = crate::common::setup_server();
    // 504 against 480 is exactly 5%.
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(504.0, 480.0));
    let news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a"]));
    let client = crate::common::test_client(&server);

    let outcome = engine(&client).run().await.unwrap();

    assert!(matches!(outcome, AlertOutcome::Held { .. }));
    news.assert_hits(0);
}

#[tokio::test]
async fn a_drop_past_the_threshold_also_dispatches() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(430.0, 480.0));
    let _news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["down day"]));
    let sms = crate::common::mock_sms_accept(&server, "SM777");
    let client = crate::common::test_client(&server);

    let report = match engine(&client).run().await.unwrap() {
        AlertOutcome::Dispatched { report, .. } => report,
        other => panic!("expected dispatched outcome, got {other:?}"),
    };

    assert_eq!(report.change.direction(), Direction::Down);
    assert_eq!(report.change.delta, -50.0);
    sms.assert_hits(1);
}

#[tokio::test]
async fn a_custom_threshold_changes_the_gate() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(500.0, 480.0));
    let _news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a"]));
    let sms = crate::common::mock_sms_accept(&server, "SM777");
    let client = crate::common::test_client(&server);

    // 4.17% clears a 3% bar.
    let outcome = engine(&client).threshold_pct(3.0).run().await.unwrap();

    assert!(matches!(outcome, AlertOutcome::Dispatched { .. }));
    sms.assert_hits(1);
}

#[tokio::test]
async fn a_missing_route_only_fails_once_the_gate_trips() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(550.0, 480.0));
    let news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a"]));
    let sms = crate::common::mock_sms_accept(&server, "SM777");
    let client = crate::common::test_client(&server);

    let err = AlertEngine::new(&client, SYMBOL, COMPANY)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CbError::Auth(_)));
    news.assert();
    sms.assert_hits(0);
}

#[tokio::test]
async fn a_prices_failure_stops_the_pass_before_news() {
    let server = crate::common::setup_server();
    let _prices = crate::common::mock_daily_series_with_body(
        &server,
        SYMBOL,
        r#"{"Error Message": "Invalid API call."}"#.to_string(),
    );
    let news = crate::common::mock_news_with_body(&server, COMPANY, news_body(&["a"]));
    let client = crate::common::test_client(&server);

    let err = engine(&client).run().await.unwrap_err();

    assert!(matches!(err, CbError::Api { .. }));
    news.assert_hits(0);
}

#[tokio::test]
async fn a_zero_previous_close_is_rejected() {
    let server = crate::common::setup_server();
    let _prices =
        crate::common::mock_daily_series_with_body(&server, SYMBOL, daily_body(500.0, 0.0));
    let client = crate::common::test_client(&server);

    let err = engine(&client).run().await.unwrap_err();

    assert!(matches!(err, CbError::ZeroReference));
}
