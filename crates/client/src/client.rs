//! Customer service REST client.
//!
//! Provides access to the `customerAccount` resource, authenticated with
//! HTTP basic credentials.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use customer_account_core::{AccountNumber, Customer};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::{debug, error, instrument};
use url::Url;

use crate::config::CustomerServiceConfig;
use crate::conversions::convert_customer_account;
use crate::error::CustomerServiceError;
use crate::types::CustomerAccountReference;

/// Path prefix of the account resource, relative to the base URL.
const ACCOUNT_PATH: [&str; 2] = ["ds-rest", "customerAccount"];

/// Query string requesting the extension entries alongside the account.
const ACCOUNT_QUERY: &str = "metadata=globalSalesCustomerExtension";

/// Customer service API client.
///
/// Built once from a [`CustomerServiceConfig`] and cheap to clone. Basic
/// credentials are sent on every request the client makes, whatever host the
/// base URL points at.
#[derive(Clone)]
pub struct CustomerServiceClient {
    inner: Arc<CustomerServiceClientInner>,
}

struct CustomerServiceClientInner {
    client: reqwest::Client,
    base_url: Url,
    username: String,
}

impl CustomerServiceClient {
    /// Create a new customer service client.
    ///
    /// # Errors
    ///
    /// Returns `CustomerServiceError::Config` if the base URL cannot carry a
    /// path or the credentials cannot be encoded as a header, and
    /// `CustomerServiceError::Http` if the HTTP client fails to build.
    pub fn new(config: &CustomerServiceConfig) -> Result<Self, CustomerServiceError> {
        if config.base_url.cannot_be_a_base() {
            return Err(CustomerServiceError::Config(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();

        // Authorization header
        let credentials = BASE64_STANDARD.encode(format!(
            "{}:{}",
            config.username,
            config.password.expose_secret()
        ));
        let mut auth_value = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|e| CustomerServiceError::Config(format!("Invalid credentials: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(CustomerServiceClientInner {
                client,
                base_url: config.base_url.clone(),
                username: config.username.clone(),
            }),
        })
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Fetch an account and map it into a [`Customer`].
    ///
    /// `sales_org` selects which extension entry supplies the customer's
    /// display and alert flags. `None` (or a blank string) means any entry.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the service answers with a
    /// non-success status, the body is not a valid account document, or the
    /// account cannot be mapped (see [`convert_customer_account`]).
    #[instrument(skip_all, fields(account_number = %account_number, sales_org = ?sales_org))]
    pub async fn get_customer_account(
        &self,
        account_number: &AccountNumber,
        sales_org: Option<&str>,
    ) -> Result<Customer, CustomerServiceError> {
        let account = self.fetch_customer_account(account_number).await?;
        let customer = convert_customer_account(account, sales_org)?;

        debug!(
            customer_number = %customer.customer_number,
            sales_org_code = %customer.sales_org_code,
            region = customer.region,
            "Customer account mapped"
        );

        Ok(customer)
    }

    /// Fetch an account without filtering extensions by sales organization.
    ///
    /// Equivalent to `get_customer_account(account_number, None)`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_customer_account`].
    pub async fn get_customer_account_any_sales_org(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Customer, CustomerServiceError> {
        self.get_customer_account(account_number, None).await
    }

    /// Fetch the raw account document.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the service answers with a
    /// non-success status, or the body is not a valid account document.
    pub async fn fetch_customer_account(
        &self,
        account_number: &AccountNumber,
    ) -> Result<CustomerAccountReference, CustomerServiceError> {
        let url = self.account_url(account_number)?;
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.parse_error(response, account_number).await);
        }

        let body = response.bytes().await?;
        let account = serde_json::from_slice(&body)?;

        debug!(bytes = body.len(), "Customer account fetched");

        Ok(account)
    }

    /// Build `{base}/ds-rest/customerAccount/{account}?metadata=globalSalesCustomerExtension`.
    fn account_url(&self, account_number: &AccountNumber) -> Result<Url, CustomerServiceError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CustomerServiceError::Config(format!(
                    "base URL cannot carry a path: {}",
                    self.inner.base_url
                ))
            })?
            .pop_if_empty()
            .extend(ACCOUNT_PATH)
            .push(account_number.as_str());
        url.set_query(Some(ACCOUNT_QUERY));
        url.set_fragment(None);
        Ok(url)
    }

    /// Turn a non-success response into an error.
    async fn parse_error(
        &self,
        response: reqwest::Response,
        account_number: &AccountNumber,
    ) -> CustomerServiceError {
        let status = response.status();

        error!(
            status = status.as_u16(),
            username = %self.inner.username,
            "Customer service returned an error status"
        );

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CustomerServiceError::Unauthorized,
            StatusCode::NOT_FOUND => CustomerServiceError::NotFound(account_number.to_string()),
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                CustomerServiceError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}

impl std::fmt::Debug for CustomerServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerServiceClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("username", &self.inner.username)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
