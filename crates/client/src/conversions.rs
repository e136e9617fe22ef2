//! Conversion from the service's account representation to domain types.

use customer_account_core::{Customer, GlobalSalesCustomerExtension};
use tracing::{debug, warn};

use crate::error::CustomerServiceError;
use crate::types::{CustomerAccountReference, GlobalSalesCustomerExtensionReference};

/// Map a fetched account into a [`Customer`].
///
/// Country, region and sales organization come from the first contact-info
/// and the first sales-org-division entry. The extension is chosen by
/// [`resolve_extension`].
///
/// # Errors
///
/// - `MissingAccountData` if the account has no contact-info or no
///   sales-org-division entries
/// - `InvalidRegionCode` if the sold-to region code is not an integer
pub fn convert_customer_account(
    account: CustomerAccountReference,
    sales_org: Option<&str>,
) -> Result<Customer, CustomerServiceError> {
    let country = account
        .contact_info()
        .first()
        .ok_or(CustomerServiceError::MissingAccountData("contactInfo"))?
        .country_code
        .clone();

    let division = account
        .sales_org_divisions()
        .first()
        .ok_or(CustomerServiceError::MissingAccountData("salesOrgDivision"))?;
    let region = parse_region_code(&division.sold_to_region_code)?;
    let sales_org_code = division.sales_organization_code.clone();

    let global_sales_customer_extension = resolve_extension(account.extensions(), sales_org);

    Ok(Customer {
        customer_number: account.customer_number,
        customer_name: account.customer_name,
        country,
        region,
        sales_org_code,
        global_sales_customer_extension,
    })
}

/// Resolve the extension flags for a sales organization.
///
/// Starts from [`GlobalSalesCustomerExtension::default`]. When `sales_org` is
/// absent or blank, any one entry is applied (entries are unordered on the
/// service side, so callers must not depend on which). Otherwise the first
/// entry whose sales organization equals `sales_org` exactly is applied; if
/// none does, the defaults are returned unchanged.
#[must_use]
pub fn resolve_extension(
    entries: &[GlobalSalesCustomerExtensionReference],
    sales_org: Option<&str>,
) -> GlobalSalesCustomerExtension {
    let mut extension = GlobalSalesCustomerExtension::default();

    if let Some(source) = select_extension(entries, sales_org) {
        debug!(
            sales_organization_code = ?source.sales_organization_code,
            "Applying global sales customer extension"
        );
        apply_extension(&mut extension, source);
    }

    extension
}

fn select_extension<'a>(
    entries: &'a [GlobalSalesCustomerExtensionReference],
    sales_org: Option<&str>,
) -> Option<&'a GlobalSalesCustomerExtensionReference> {
    let Some(sales_org) = sales_org.filter(|s| !s.trim().is_empty()) else {
        return entries.first();
    };

    let matched = entries.iter().find(|e| e.is_for_sales_org(sales_org));
    if matched.is_none() && !entries.is_empty() {
        warn!(
            sales_org,
            available = entries.len(),
            "No extension entry for sales org, using defaults"
        );
    }
    matched
}

/// Overwrite all six flags from a source entry.
///
/// Wholesale and retail come from a text search of the raw display-price
/// strings; the other four are copied (absent reads as `false`).
fn apply_extension(
    target: &mut GlobalSalesCustomerExtension,
    source: &GlobalSalesCustomerExtensionReference,
) {
    target.display_wholesale_price_indicator = source.wholesale_price_flag();
    target.display_retail_price_indicator = source.retail_price_flag();
    target.display_net_price_indicator = source.display_net_price_indicator.unwrap_or(false);
    target.display_brazil_nota_fiscal_indicator =
        source.display_brazil_nota_fiscal_indicator.unwrap_or(false);
    target.order_reduced_quantity_alert_indicator =
        source.order_reduced_quantity_alert_indicator.unwrap_or(false);
    target.shipment_alert_indicator = source.shipment_alert_indicator.unwrap_or(false);
}

fn parse_region_code(value: &str) -> Result<i32, CustomerServiceError> {
    value
        .parse()
        .map_err(|source| CustomerServiceError::InvalidRegionCode {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn account(extensions: Value) -> CustomerAccountReference {
        serde_json::from_value(json!({
            "customerNumber": "0001234",
            "customerName": "Acme Sports",
            "contactInfo": [{ "countryCode": "US" }, { "countryCode": "CA" }],
            "salesOrgDivision": [
                { "soldToRegionCode": "10", "salesOrganizationCode": "ABC" },
                { "soldToRegionCode": "20", "salesOrganizationCode": "DEF" }
            ],
            "globalSalesCustomerExtension": extensions
        }))
        .unwrap()
    }

    fn abc_extension() -> Value {
        json!({
            "salesOrganizationCode": "ABC",
            "displayWholesalePrice": "Contains Shipment Alert text",
            "displayRetailPrice": "no match",
            "displayNetPriceIndicator": false,
            "displayBrazilNotaFiscalIndicator": true,
            "orderReducedQuantityAlertIndicator": true,
            "shipmentAlertIndicator": true
        })
    }

    fn def_extension() -> Value {
        json!({
            "salesOrganizationCode": "DEF",
            "displayWholesalePrice": "no match",
            "displayRetailPrice": "Shipment Alert",
            "displayNetPriceIndicator": true,
            "displayBrazilNotaFiscalIndicator": false,
            "orderReducedQuantityAlertIndicator": false,
            "shipmentAlertIndicator": false
        })
    }

    #[test]
    fn test_maps_first_contact_and_division() {
        let customer = convert_customer_account(account(json!([])), None).unwrap();

        assert_eq!(customer.customer_number, "0001234");
        assert_eq!(customer.customer_name, "Acme Sports");
        assert_eq!(customer.country.as_deref(), Some("US"));
        assert_eq!(customer.region, 10);
        assert_eq!(customer.sales_org_code, "ABC");
    }

    #[test]
    fn test_no_extensions_gives_defaults() {
        let customer = convert_customer_account(account(json!(null)), Some("ABC")).unwrap();
        assert_eq!(
            customer.global_sales_customer_extension,
            GlobalSalesCustomerExtension::default()
        );
    }

    #[test]
    fn test_matching_sales_org_applies_entry() {
        let customer =
            convert_customer_account(account(json!([def_extension(), abc_extension()])), Some("ABC"))
                .unwrap();
        let ext = customer.global_sales_customer_extension;

        assert!(ext.display_wholesale_price_indicator);
        assert!(!ext.display_retail_price_indicator);
        assert!(!ext.display_net_price_indicator);
        assert!(ext.display_brazil_nota_fiscal_indicator);
        assert!(ext.order_reduced_quantity_alert_indicator);
        assert!(ext.shipment_alert_indicator);
    }

    #[test]
    fn test_unmatched_sales_org_keeps_defaults() {
        let customer =
            convert_customer_account(account(json!([abc_extension(), def_extension()])), Some("ZZZ"))
                .unwrap();
        assert_eq!(
            customer.global_sales_customer_extension,
            GlobalSalesCustomerExtension::default()
        );
    }

    #[test]
    fn test_no_sales_org_applies_some_entry() {
        let entries: Vec<GlobalSalesCustomerExtensionReference> =
            serde_json::from_value(json!([abc_extension(), def_extension()])).unwrap();
        let candidates: Vec<GlobalSalesCustomerExtension> = entries
            .iter()
            .map(|e| resolve_extension(std::slice::from_ref(e), None))
            .collect();

        for sales_org in [None, Some(""), Some("   ")] {
            let resolved = resolve_extension(&entries, sales_org);
            assert!(candidates.contains(&resolved), "{sales_org:?}");
            assert_ne!(resolved, GlobalSalesCustomerExtension::default());
        }
    }

    #[test]
    fn test_sales_org_match_is_exact() {
        let entries: Vec<GlobalSalesCustomerExtensionReference> =
            serde_json::from_value(json!([abc_extension()])).unwrap();

        assert_eq!(
            resolve_extension(&entries, Some("abc")),
            GlobalSalesCustomerExtension::default()
        );
        assert_eq!(
            resolve_extension(&entries, Some(" ABC")),
            GlobalSalesCustomerExtension::default()
        );
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let mut second = abc_extension();
        second["shipmentAlertIndicator"] = json!(false);
        let entries: Vec<GlobalSalesCustomerExtensionReference> =
            serde_json::from_value(json!([abc_extension(), second])).unwrap();

        assert!(resolve_extension(&entries, Some("ABC")).shipment_alert_indicator);
    }

    #[test]
    fn test_absent_flags_read_as_false() {
        let entries: Vec<GlobalSalesCustomerExtensionReference> =
            serde_json::from_value(json!([{ "salesOrganizationCode": "ABC" }])).unwrap();
        let ext = resolve_extension(&entries, Some("ABC"));

        assert!(!ext.display_wholesale_price_indicator);
        assert!(!ext.display_retail_price_indicator);
        assert!(!ext.display_net_price_indicator);
        assert!(!ext.shipment_alert_indicator);
    }

    #[test]
    fn test_non_numeric_region_fails() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "contactInfo": [{ "countryCode": "US" }],
            "salesOrgDivision": [{ "soldToRegionCode": "north", "salesOrganizationCode": "ABC" }]
        }))
        .unwrap();

        let result = convert_customer_account(account, None);
        assert!(matches!(
            result,
            Err(CustomerServiceError::InvalidRegionCode { ref value, .. }) if value == "north"
        ));
    }

    #[test]
    fn test_signed_region_parses() {
        assert_eq!(parse_region_code("+7").unwrap(), 7);
        assert_eq!(parse_region_code("007").unwrap(), 7);
        assert!(parse_region_code(" 7").is_err());
        assert!(parse_region_code("").is_err());
    }

    #[test]
    fn test_empty_contact_info_fails() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "contactInfo": [],
            "salesOrgDivision": [{ "soldToRegionCode": "1", "salesOrganizationCode": "ABC" }]
        }))
        .unwrap();

        assert!(matches!(
            convert_customer_account(account, None),
            Err(CustomerServiceError::MissingAccountData("contactInfo"))
        ));
    }

    #[test]
    fn test_missing_sales_org_division_fails() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "contactInfo": [{ "countryCode": "US" }]
        }))
        .unwrap();

        assert!(matches!(
            convert_customer_account(account, None),
            Err(CustomerServiceError::MissingAccountData("salesOrgDivision"))
        ));
    }

    #[test]
    fn test_missing_country_code_maps_to_none() {
        let account: CustomerAccountReference = serde_json::from_value(json!({
            "customerNumber": "1",
            "customerName": "Acme",
            "contactInfo": [{}],
            "salesOrgDivision": [{ "soldToRegionCode": "1", "salesOrganizationCode": "ABC" }]
        }))
        .unwrap();

        let customer = convert_customer_account(account, None).unwrap();
        assert_eq!(customer.country, None);
    }
}
