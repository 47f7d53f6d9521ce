use super::*;
use crate::net::request::{HttpRequest, HttpResponse, Method};
use crate::storage::token::MemoryTokenStore;
use serde_json::{Value, json};
use std::sync::Mutex;

struct ScriptedTransport {
    reply: HttpResponse,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn ok(body: &str) -> Self {
        Self::status(200, "OK", body)
    }

    fn status(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            reply: HttpResponse { status, status_text: status_text.to_owned(), body: body.to_owned() },
            sent: Mutex::new(Vec::new()),
        }
    }

    fn last(&self) -> HttpRequest {
        self.sent
            .lock()
            .expect("mock mutex should lock")
            .last()
            .cloned()
            .expect("a request should have been sent")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().expect("mock mutex should lock").push(request);
        Ok(self.reply.clone())
    }
}

fn shop(transport: ScriptedTransport) -> ApiClient<ScriptedTransport, MemoryTokenStore> {
    ApiClient::new("http://localhost:8000", transport, MemoryTokenStore::new())
}

fn sent_body(req: &HttpRequest) -> Value {
    serde_json::from_str(req.body.as_deref().expect("request should carry a body")).unwrap()
}

#[test]
fn my_purchases_endpoint_encodes_session() {
    assert_eq!(my_purchases_endpoint("alice"), "/mypurchases?session=alice");
    assert_eq!(my_purchases_endpoint("a b&c"), "/mypurchases?session=a%20b%26c");
}

#[tokio::test]
async fn login_saves_issued_token() {
    let api = shop(ScriptedTransport::ok(r#"{"access_token":"alice","token_type":"bearer"}"#));

    let outcome = api.login("alice", "pw").await.unwrap();

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(api.tokens().get().as_deref(), Some("alice"));
    let req = api.transport().last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://localhost:8000/login");
    assert_eq!(sent_body(&req), json!({"username": "alice", "password": "pw"}));
}

#[tokio::test]
async fn login_rejected_leaves_store_untouched() {
    let api = shop(ScriptedTransport::ok("{}"));
    api.tokens().save("previous");

    let outcome = api.login("alice", "wrong").await.unwrap();

    assert_eq!(outcome, LoginOutcome::Rejected);
    assert_eq!(api.tokens().get().as_deref(), Some("previous"));
}

#[tokio::test]
async fn login_error_object_with_ok_status_is_rejected() {
    let api = shop(ScriptedTransport::ok(r#"{"status_code":400,"detail":"db offline","headers":null}"#));

    let outcome = api.login("alice", "pw").await.unwrap();

    assert_eq!(outcome, LoginOutcome::Rejected);
    assert_eq!(api.tokens().get(), None);
}

#[tokio::test]
async fn products_error_object_with_ok_status_fails_decode() {
    let api = shop(ScriptedTransport::ok(r#"{"status_code":400,"detail":"db offline"}"#));
    let err = api.products().await.unwrap_err();
    assert!(err.message().contains("expected a sequence"), "unexpected message: {err}");
}

#[tokio::test]
async fn login_error_status_propagates_detail() {
    let api = shop(ScriptedTransport::status(400, "Bad Request", r#"{"detail":"db offline"}"#));
    let err = api.login("alice", "pw").await.unwrap_err();
    assert_eq!(err.message(), "db offline");
    assert_eq!(api.tokens().get(), None);
}

#[tokio::test]
async fn products_decode_rows() {
    let api = shop(ScriptedTransport::ok(
        r#"[{"name":"Espresso","price":2.5,"description":"short"},{"name":"Latte","price":3.75,"description":null}]"#,
    ));

    let products = api.products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].name, "Latte");
    assert!((products[1].price - 3.75).abs() < f64::EPSILON);
    assert_eq!(api.transport().last().method, Method::Get);
}

#[tokio::test]
async fn purchases_send_bearer_when_signed_in() {
    let api = shop(ScriptedTransport::ok(r#"[{"username":"alice","productname":"Latte"}]"#));
    api.tokens().save("alice");

    let rows = api.purchases().await.unwrap();

    assert_eq!(rows[0].productname.as_deref(), Some("Latte"));
    assert_eq!(api.transport().last().headers.get("Authorization"), Some("Bearer alice"));
}

#[tokio::test]
async fn my_purchases_hits_query_endpoint() {
    let api = shop(ScriptedTransport::ok("[]"));
    let rows = api.my_purchases("alice smith").await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(api.transport().last().url, "http://localhost:8000/mypurchases?session=alice%20smith");
}

#[tokio::test]
async fn purchase_posts_request_and_returns_text() {
    let api = shop(ScriptedTransport::ok("ok"));

    let text = api.purchase("bob", "Mocha").await.unwrap();

    assert_eq!(text, "ok");
    let req = api.transport().last();
    assert_eq!(req.url, "http://localhost:8000/purchase");
    assert_eq!(sent_body(&req), json!({"username": "bob", "productname": "Mocha"}));
}

#[tokio::test]
async fn register_posts_registration() {
    let api = shop(ScriptedTransport::ok(""));

    api.register("carol", "pw", "carol@example.com").await.unwrap();

    let req = api.transport().last();
    assert_eq!(req.url, "http://localhost:8000/register");
    assert_eq!(
        sent_body(&req),
        json!({"username": "carol", "password": "pw", "email": "carol@example.com"})
    );
}
