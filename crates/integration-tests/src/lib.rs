//! Integration tests for the customer account client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p customer-account-integration-tests
//! ```
//!
//! The tests need no external services: [`FakeCustomerService`] serves the
//! `customerAccount` resource from an in-process axum router bound to an
//! ephemeral localhost port and records every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::routing::get;
use customer_account_client::{CustomerServiceClient, CustomerServiceConfig};
use secrecy::SecretString;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Username the fake service expects.
pub const TEST_USERNAME: &str = "svc-sales";

/// Password the fake service expects.
pub const TEST_PASSWORD: &str = "k9#Tq2!vL";

/// A request observed by the fake service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path, still percent-encoded.
    pub path: String,
    /// Raw query string.
    pub query: Option<String>,
    /// Account number as decoded from the path.
    pub account_number: String,
    /// `Authorization` header value.
    pub authorization: Option<String>,
    /// `Accept` header value.
    pub accept: Option<String>,
}

#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct FakeState {
    responses: HashMap<String, CannedResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for [`FakeCustomerService`].
#[derive(Default)]
pub struct FakeCustomerServiceBuilder {
    responses: HashMap<String, CannedResponse>,
}

impl FakeCustomerServiceBuilder {
    /// Serve `body` with `200 OK` for an account.
    #[must_use]
    pub fn account(self, account_number: &str, body: &serde_json::Value) -> Self {
        self.raw(account_number, StatusCode::OK, body.to_string())
    }

    /// Serve an arbitrary status and body for an account.
    #[must_use]
    pub fn raw(mut self, account_number: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses.insert(
            account_number.to_string(),
            CannedResponse {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Bind to an ephemeral port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(self) -> FakeCustomerService {
        let state = Arc::new(FakeState {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/ds-rest/customerAccount/{account}", get(customer_account))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake customer service");
        let addr = listener
            .local_addr()
            .expect("Failed to read fake customer service address");

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        FakeCustomerService { addr, state, task }
    }
}

/// In-process stand-in for the remote customer service.
///
/// Unknown accounts get `404`; requests with the wrong credentials get `401`.
pub struct FakeCustomerService {
    addr: SocketAddr,
    state: Arc<FakeState>,
    task: JoinHandle<()>,
}

impl FakeCustomerService {
    /// Start configuring a fake service.
    #[must_use]
    pub fn builder() -> FakeCustomerServiceBuilder {
        FakeCustomerServiceBuilder::default()
    }

    /// Base URL of the fake service.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client pointed at this service with the expected credentials.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> CustomerServiceClient {
        self.client_with_password(TEST_PASSWORD)
    }

    /// A client pointed at this service with a chosen password.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client_with_password(&self, password: &str) -> CustomerServiceClient {
        let config = CustomerServiceConfig::new(
            &self.base_url(),
            TEST_USERNAME,
            SecretString::from(password.to_string()),
        )
        .expect("valid test configuration");
        CustomerServiceClient::new(&config).expect("client builds")
    }

    /// Requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the request log lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("request log poisoned")
            .clone()
    }
}

impl Drop for FakeCustomerService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Expected `Authorization` header for the test credentials.
#[must_use]
pub fn expected_authorization() -> String {
    use base64::Engine;

    let encoded = base64::engine::general_purpose::STANDARD
        .encode(format!("{TEST_USERNAME}:{TEST_PASSWORD}"));
    format!("Basic {encoded}")
}

async fn customer_account(
    State(state): State<Arc<FakeState>>,
    Path(account_number): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    let request = RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(String::from),
        account_number: account_number.clone(),
        authorization: header_value(header::AUTHORIZATION),
        accept: header_value(header::ACCEPT),
    };
    let authorized = request.authorization.as_deref() == Some(expected_authorization().as_str());

    if let Ok(mut requests) = state.requests.lock() {
        requests.push(request);
    }

    let json = [(header::CONTENT_TYPE, "application/json")];

    if !authorized {
        return (StatusCode::UNAUTHORIZED, json, String::new());
    }

    match state.responses.get(&account_number) {
        Some(canned) => (canned.status, json, canned.body.clone()),
        None => (
            StatusCode::NOT_FOUND,
            json,
            r#"{"error":"account not found"}"#.to_string(),
        ),
    }
}

/// A minimal valid account document.
#[must_use]
pub fn base_account(customer_number: &str) -> serde_json::Value {
    serde_json::json!({
        "customerNumber": customer_number,
        "customerName": "Acme Sports",
        "contactInfo": [{ "countryCode": "US" }],
        "salesOrgDivision": [{ "soldToRegionCode": "10", "salesOrganizationCode": "ABC" }]
    })
}
