use pretty_assertions::assert_eq;
use serde_json::json;
use trustscan_core::{Breakdown, SecurityToken, VerificationRequest, VerifyError};
use trustscan_engine::{ReqwestVerifier, Verifier, VerifierSettings};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn verifier_for(server: &MockServer) -> ReqwestVerifier {
    let settings = VerifierSettings {
        base_url: server.uri(),
        ..VerifierSettings::default()
    };
    ReqwestVerifier::new(settings).expect("verifier")
}

fn token() -> SecurityToken {
    SecurityToken::new("csrf-abc").expect("token")
}

fn request(url: &str) -> VerificationRequest {
    VerificationRequest {
        url: url.to_string(),
    }
}

#[tokio::test]
async fn posts_form_encoded_url_with_csrf_header() {
    trustscan_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .and(header("X-CSRFToken", "csrf-abc"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("url=a.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://a.com",
            "trust_score": 91,
            "risk_score": 9,
            "is_safe": true,
            "breakdown": {"legitimacy": 95, "brand": 90, "scam": 3, "reviews": 88},
            "message": "Verification Complete"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = verifier_for(&server)
        .verify(&request("a.com"), &token())
        .await
        .expect("verify ok");

    assert_eq!(result.url, "https://a.com");
    assert_eq!(result.trust_score, 91.0);
    assert!(result.is_safe);
    assert_eq!(result.risk_score, Some(9.0));
    assert_eq!(result.message.as_deref(), Some("Verification Complete"));
    assert_eq!(
        result.breakdown,
        Some(Breakdown {
            legitimacy: 95.0,
            brand: 90.0,
            scam: 3.0,
            reviews: 88.0,
        })
    );
}

#[tokio::test]
async fn url_field_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .and(body_string("url=https%3A%2F%2Fa.com%2F%3Fq%3D1%26r%3D2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://a.com/?q=1&r=2",
            "trust_score": 50,
            "is_safe": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = verifier_for(&server)
        .verify(&request("https://a.com/?q=1&r=2"), &token())
        .await
        .expect("verify ok");
    assert_eq!(result.breakdown, None);
    assert!(!result.is_safe);
}

#[tokio::test]
async fn non_success_status_carries_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "No URL provided"})),
        )
        .mount(&server)
        .await;

    let err = verifier_for(&server)
        .verify(&request(""), &token())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        VerifyError::Transport {
            status: Some(400),
            message: "network response was not ok: Bad Request".to_string(),
        }
    );
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>login</html>", "text/html"))
        .mount(&server)
        .await;

    let err = verifier_for(&server)
        .verify(&request("a.com"), &token())
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::MalformedResponse { .. }), "{err:?}");
}

#[tokio::test]
async fn shape_mismatch_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "a.com",
            "trust_score": "high",
            "is_safe": true
        })))
        .mount(&server)
        .await;

    let err = verifier_for(&server)
        .verify(&request("a.com"), &token())
        .await
        .unwrap_err();
    assert!(matches!(err, VerifyError::MalformedResponse { .. }), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let settings = VerifierSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..VerifierSettings::default()
    };
    let verifier = ReqwestVerifier::new(settings).expect("verifier");

    let err = verifier.verify(&request("a.com"), &token()).await.unwrap_err();
    assert!(
        matches!(err, VerifyError::Transport { status: None, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn loads_token_and_replays_dashboard_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "csrftoken=cookie-token; Path=/")
                .set_body_raw(
                    r#"<html><body><form id="verifyForm">
                        <input type="hidden" name="csrfmiddlewaretoken" value="page-token">
                        <input id="urlInput" name="url">
                    </form></body></html>"#,
                    "text/html; charset=utf-8",
                ),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .and(header("X-CSRFToken", "page-token"))
        .and(header("cookie", "csrftoken=cookie-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "a.com",
            "trust_score": 70,
            "is_safe": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = verifier_for(&server);
    let token = verifier
        .load_security_token()
        .await
        .expect("dashboard ok")
        .expect("token present");
    assert_eq!(token.as_str(), "page-token");

    verifier
        .verify(&request("a.com"), &token)
        .await
        .expect("verify ok");
}

#[tokio::test]
async fn configured_session_cookie_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/verify/"))
        .and(header("cookie", "sessionid=s3ss10n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "a.com",
            "trust_score": 70,
            "is_safe": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = VerifierSettings {
        base_url: server.uri(),
        session_cookie: Some("sessionid=s3ss10n".to_string()),
        ..VerifierSettings::default()
    };
    let verifier = ReqwestVerifier::new(settings).expect("verifier");
    verifier
        .verify(&request("a.com"), &token())
        .await
        .expect("verify ok");
}

#[tokio::test]
async fn dashboard_without_token_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let token = verifier_for(&server)
        .load_security_token()
        .await
        .expect("dashboard ok");
    assert!(token.is_none());
}

#[test]
fn rejects_unparseable_base_url() {
    let settings = VerifierSettings {
        base_url: "not a url".to_string(),
        ..VerifierSettings::default()
    };
    assert!(ReqwestVerifier::new(settings).is_err());
}
