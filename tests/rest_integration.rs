use std::sync::Arc;

use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use biscoint_api_client::auth::StaticCredentials;
use biscoint_api_client::rest::{
    BiscointApiExt, BiscointClient, OfferRequest, TradesRequest,
};
use biscoint_api_client::{BiscointError, Operation, Side};
use rust_decimal::Decimal;

fn build_client(server: &MockServer) -> BiscointClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    BiscointClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn offer_data() -> serde_json::Value {
    serde_json::json!({
        "offerId": "ets52q7WQLrWw79Bq",
        "base": "BTC",
        "quote": "BRL",
        "op": "buy",
        "isQuote": false,
        "baseAmount": "0.01000000",
        "quoteAmount": "353.43",
        "efPrice": "35343.00",
        "createdAt": "2020-01-23T12:26:13.454Z",
        "expiresAt": "2020-01-23T12:26:28.454Z",
        "apiKeyId": "BdFABxNakZyxPwnRu"
    })
}

#[tokio::test]
async fn test_get_balance_signed() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": { "BRL": "9580.58", "BTC": "0.01138164" }
    });

    Mock::given(method("GET"))
        .and(path("/v1/balance"))
        .and(query_param("request", "v1/balance"))
        .and(header("BSCNT-APIKEY", "test_key"))
        .and(header(
            "BSCNT-SIGN",
            "118f5f2cd67c4a410bdda8682254a39f7d8e941a07315fd6c341624fd91064aa",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.get_balance().await.unwrap();
    assert_eq!(balance, response["data"]);
}

#[tokio::test]
async fn test_typed_balance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "BRL": "9580.58", "BTC": "0.01138164" }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.balance().await.unwrap();
    assert_eq!(balance["BRL"], "9580.58".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_get_trades_without_filters_omits_them() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/trades"))
        .and(query_param_is_missing("op"))
        .and(query_param_is_missing("length"))
        .and(query_param("request", "v1/trades"))
        .and(header(
            "BSCNT-SIGN",
            "502a467c89ea179c58b883495062313b0dfd9774a83751ea03c8564da7f0891b",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client.get_trades(&TradesRequest::new()).await.unwrap();
    assert_eq!(trades, serde_json::json!([]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("request=v1%2Ftrades"));
}

#[tokio::test]
async fn test_get_trades_with_filters() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [{
            "id": "D6x63B3q3Mec4tggY",
            "op": "sell",
            "base": "BTC",
            "quote": "BRL",
            "baseAmount": "0.01000000",
            "quoteAmount": "362.82",
            "apiKeyId": "BdFABxNakZyxPwnRu",
            "efPrice": "36282.00",
            "date": "2020-01-22T23:25:02.785Z"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/v1/trades"))
        .and(query_param("op", "sell"))
        .and(query_param("length", "20"))
        .and(header(
            "BSCNT-SIGN",
            "de0edb51cac3dffde74ed6756e5624ef9b1117c050ac3cb4aa7441b8c7d564f4",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client
        .trades(&TradesRequest::new().op(Side::Sell).length(20))
        .await
        .unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].op, Side::Sell);
    assert_eq!(trades[0].quote_amount, "362.82".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_get_offer_defaults_signed() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "data": offer_data() });

    Mock::given(method("GET"))
        .and(path("/v1/offer"))
        .and(query_param("op", "buy"))
        .and(query_param("amount", "0.01"))
        .and(query_param("isQuote", "false"))
        .and(query_param("base", "BTC"))
        .and(query_param("quote", "BRL"))
        .and(query_param("request", "v1/offer"))
        .and(header("BSCNT-APIKEY", "test_key"))
        .and(header(
            "BSCNT-SIGN",
            "b83518f9c4ab98379d59fcaa5adf39dc3b28f90c416e48bb4ed26a6973809226",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let offer = client
        .get_offer(&OfferRequest::new(Side::Buy, "0.01", false))
        .await
        .unwrap();
    assert_eq!(offer["offerId"], "ets52q7WQLrWw79Bq");
}

#[tokio::test]
async fn test_get_offer_custom_pair() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/offer"))
        .and(query_param("base", "ETH"))
        .and(query_param("isQuote", "true"))
        .and(header(
            "BSCNT-SIGN",
            "06b1da546e3d9332c2547d04ac9aa30775b538d177a21cfce3ae0ef9e235bbf6",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": offer_data() })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = OfferRequest::sell("500.00", true).base("ETH");
    let offer = client.offer(&request).await.unwrap();
    assert_eq!(offer.offer_id, "ets52q7WQLrWw79Bq");
}

#[tokio::test]
async fn test_confirm_offer_posts_form_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "offerId": "ets52q7WQLrWw79Bq",
            "base": "BTC",
            "quote": "BRL",
            "op": "buy",
            "isQuote": false,
            "baseAmount": "0.01000000",
            "quoteAmount": "353.43",
            "efPrice": "35343.00",
            "createdAt": "2020-01-23T12:26:13.454Z",
            "confirmedAt": "2020-01-23T12:26:14.096Z",
            "apiKeyId": "BdFABxNakZyxPwnRu"
        }
    });

    Mock::given(method("POST"))
        .and(path("/v1/offer"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("offerId=ets52q7WQLrWw79Bq&request=v1%2Foffer"))
        .and(header(
            "BSCNT-SIGN",
            "0c1d698e652f22be403e1d415c85f96da60ddb20c89a544fda710e9bd8080c33",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let receipt = client.confirm("ets52q7WQLrWw79Bq").await.unwrap();
    assert_eq!(receipt.offer_id, "ets52q7WQLrWw79Bq");
    assert_eq!(receipt.ef_price, "35343.00".parse::<Decimal>().unwrap());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })))
        .expect(0)
        .mount(&server)
        .await;

    let client = BiscointClient::builder().base_url(server.uri()).build();
    let err = client.get_balance().await.unwrap_err();
    assert!(matches!(err, BiscointError::MissingCredentials));
}

#[tokio::test]
async fn test_unauthorized_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/offer"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "message": "Invalid signature" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.confirm_offer("expired").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.is_client_error());
    assert!(err.to_string().contains("Invalid signature"));
}

#[tokio::test]
async fn test_disabled_confirm_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": {} })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/offer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": offer_data() })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BiscointClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .disable(Operation::ConfirmOffer)
        .build();

    let offer = client.offer(&OfferRequest::buy("0.01", false)).await.unwrap();
    let err = client.confirm_offer(&offer.offer_id).await.unwrap_err();
    assert!(err.is_unsupported());
}
