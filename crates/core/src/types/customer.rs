//! Customer record built from a remote customer account.

use serde::{Deserialize, Serialize};

use super::extension::GlobalSalesCustomerExtension;

/// A customer as seen by the sales side of the house.
///
/// Built fresh on every fetch; there is no persisted identity beyond the
/// customer number. The extension is always present, falling back to
/// [`GlobalSalesCustomerExtension::default`] when the account carries no
/// matching entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_number: String,
    pub customer_name: String,
    /// Country code of the primary contact, if the service supplied one.
    pub country: Option<String>,
    /// Sold-to region of the primary sales-org division.
    pub region: i32,
    /// Sales organization of the primary sales-org division.
    #[serde(rename = "salesOrgCd")]
    pub sales_org_code: String,
    pub global_sales_customer_extension: GlobalSalesCustomerExtension,
}

impl Customer {
    /// Create a customer with no country, region 0, and default extension flags.
    #[must_use]
    pub fn new(customer_number: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            customer_number: customer_number.into(),
            customer_name: customer_name.into(),
            country: None,
            region: 0,
            sales_org_code: String::new(),
            global_sales_customer_extension: GlobalSalesCustomerExtension::default(),
        }
    }
}
