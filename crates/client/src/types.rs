//! Wire types for the customer service's `customerAccount` resource.
//!
//! Field names follow the service's camelCase JSON. Unknown keys are ignored
//! everywhere; list fields may be absent or `null`.

use serde::Deserialize;

/// Marker searched for in the raw display-price strings.
pub const SHIPMENT_ALERT_MARKER: &str = "Shipment Alert";

/// A customer account as returned by
/// `GET /ds-rest/customerAccount/{account}?metadata=globalSalesCustomerExtension`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccountReference {
    pub customer_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub contact_info: Option<Vec<ContactInfoReference>>,
    #[serde(default)]
    pub sales_org_division: Option<Vec<SalesOrgDivisionReference>>,
    /// Unordered on the service side; treat as a set.
    #[serde(default)]
    pub global_sales_customer_extension: Option<Vec<GlobalSalesCustomerExtensionReference>>,
}

impl CustomerAccountReference {
    /// Contact-info entries (empty if the service omitted them).
    #[must_use]
    pub fn contact_info(&self) -> &[ContactInfoReference] {
        self.contact_info.as_deref().unwrap_or_default()
    }

    /// Sales-org-division entries (empty if the service omitted them).
    #[must_use]
    pub fn sales_org_divisions(&self) -> &[SalesOrgDivisionReference] {
        self.sales_org_division.as_deref().unwrap_or_default()
    }

    /// Extension entries (empty if the service omitted them).
    #[must_use]
    pub fn extensions(&self) -> &[GlobalSalesCustomerExtensionReference] {
        self.global_sales_customer_extension
            .as_deref()
            .unwrap_or_default()
    }
}

/// Contact information entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoReference {
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Sales organization / division assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrgDivisionReference {
    /// Numeric region, transmitted as a string.
    pub sold_to_region_code: String,
    pub sales_organization_code: String,
}

/// Extension entry for one sales organization.
///
/// The two `display_*_price` values are free text; the boolean flags may be
/// absent or `null`, which reads as `false`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSalesCustomerExtensionReference {
    #[serde(default)]
    pub sales_organization_code: Option<String>,
    #[serde(default)]
    pub display_wholesale_price: Option<String>,
    #[serde(default)]
    pub display_retail_price: Option<String>,
    #[serde(default)]
    pub display_net_price_indicator: Option<bool>,
    #[serde(default)]
    pub display_brazil_nota_fiscal_indicator: Option<bool>,
    #[serde(default)]
    pub order_reduced_quantity_alert_indicator: Option<bool>,
    #[serde(default)]
    pub shipment_alert_indicator: Option<bool>,
}

impl GlobalSalesCustomerExtensionReference {
    /// Wholesale-price display flag: whether the raw wholesale display text
    /// mentions [`SHIPMENT_ALERT_MARKER`].
    #[must_use]
    pub fn wholesale_price_flag(&self) -> bool {
        contains_shipment_alert(self.display_wholesale_price.as_deref())
    }

    /// Retail-price display flag: whether the raw retail display text
    /// mentions [`SHIPMENT_ALERT_MARKER`].
    #[must_use]
    pub fn retail_price_flag(&self) -> bool {
        contains_shipment_alert(self.display_retail_price.as_deref())
    }

    /// Exact (case-sensitive) sales organization match.
    #[must_use]
    pub fn is_for_sales_org(&self, sales_org: &str) -> bool {
        self.sales_organization_code.as_deref() == Some(sales_org)
    }
}

fn contains_shipment_alert(text: Option<&str>) -> bool {
    text.is_some_and(|t| t.contains(SHIPMENT_ALERT_MARKER))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_full_account() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "0001234",
            "customerName": "Acme Sports",
            "contactInfo": [{ "countryCode": "US" }],
            "salesOrgDivision": [{ "soldToRegionCode": "10", "salesOrganizationCode": "ABC" }],
            "globalSalesCustomerExtension": [{
                "salesOrganizationCode": "ABC",
                "displayWholesalePrice": "Shipment Alert",
                "displayRetailPrice": "none",
                "displayNetPriceIndicator": false,
                "displayBrazilNotaFiscalIndicator": true,
                "orderReducedQuantityAlertIndicator": true,
                "shipmentAlertIndicator": false
            }]
        }))
        .unwrap();

        assert_eq!(account.customer_number, "0001234");
        assert_eq!(account.contact_info()[0].country_code.as_deref(), Some("US"));
        assert_eq!(account.sales_org_divisions()[0].sold_to_region_code, "10");
        let ext = &account.extensions()[0];
        assert_eq!(ext.display_net_price_indicator, Some(false));
        assert_eq!(ext.display_brazil_nota_fiscal_indicator, Some(true));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "creditLimit": 5000,
            "contactInfo": [{ "countryCode": "DE", "phone": "+49" }],
            "salesOrgDivision": [{
                "soldToRegionCode": "3",
                "salesOrganizationCode": "X",
                "division": "footwear"
            }],
            "globalSalesCustomerExtension": [{ "salesOrganizationCode": "X", "legacyFlag": "Y" }]
        }))
        .unwrap();

        assert_eq!(account.extensions().len(), 1);
    }

    #[test]
    fn test_absent_and_null_lists_are_empty() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "contactInfo": null
        }))
        .unwrap();

        assert!(account.contact_info().is_empty());
        assert!(account.sales_org_divisions().is_empty());
        assert!(account.extensions().is_empty());
    }

    #[test]
    fn test_missing_customer_number_fails() {
        let result = serde_json::from_value::<CustomerAccountReference>(json!({
            "customerName": "Acme"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_region_code_fails() {
        let result = serde_json::from_value::<CustomerAccountReference>(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "salesOrgDivision": [{ "salesOrganizationCode": "ABC" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_price_flags_search_for_shipment_alert() {
        let ext = GlobalSalesCustomerExtensionReference {
            display_wholesale_price: Some("Contains Shipment Alert text".to_string()),
            display_retail_price: Some("no match".to_string()),
            ..Default::default()
        };

        assert!(ext.wholesale_price_flag());
        assert!(!ext.retail_price_flag());
    }

    #[test]
    fn test_price_flags_are_case_sensitive() {
        let ext = GlobalSalesCustomerExtensionReference {
            display_wholesale_price: Some("shipment alert".to_string()),
            ..Default::default()
        };

        assert!(!ext.wholesale_price_flag());
    }

    #[test]
    fn test_absent_price_text_is_false() {
        let ext = GlobalSalesCustomerExtensionReference::default();
        assert!(!ext.wholesale_price_flag());
        assert!(!ext.retail_price_flag());
    }

    #[test]
    fn test_is_for_sales_org_exact_match() {
        let ext = GlobalSalesCustomerExtensionReference {
            sales_organization_code: Some("ABC".to_string()),
            ..Default::default()
        };

        assert!(ext.is_for_sales_org("ABC"));
        assert!(!ext.is_for_sales_org("abc"));
        assert!(!ext.is_for_sales_org("ABC "));
        assert!(!GlobalSalesCustomerExtensionReference::default().is_for_sales_org("ABC"));
    }
}
