//! Per-sales-organization display and alert preferences.

use serde::{Deserialize, Serialize};

/// Display and alert preferences attached to a customer for one sales
/// organization.
///
/// A freshly created value carries the defaults below. The client overwrites
/// all six flags when the remote account has an extension entry for the
/// requested sales organization, and leaves them untouched otherwise.
///
/// | Flag | Default |
/// |------|---------|
/// | `display_wholesale_price_indicator` | `true` |
/// | `display_retail_price_indicator` | `true` |
/// | `display_net_price_indicator` | `true` |
/// | `display_brazil_nota_fiscal_indicator` | `false` |
/// | `order_reduced_quantity_alert_indicator` | `false` |
/// | `shipment_alert_indicator` | `false` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSalesCustomerExtension {
    /// Show wholesale prices.
    pub display_wholesale_price_indicator: bool,
    /// Show retail prices.
    pub display_retail_price_indicator: bool,
    /// Show net prices.
    pub display_net_price_indicator: bool,
    /// Show the Brazilian fiscal note (nota fiscal).
    pub display_brazil_nota_fiscal_indicator: bool,
    /// Alert when an order line is cut to a reduced quantity.
    pub order_reduced_quantity_alert_indicator: bool,
    /// Alert on shipment.
    pub shipment_alert_indicator: bool,
}

impl GlobalSalesCustomerExtension {
    pub const DEFAULT_DISPLAY_WHOLESALE_PRICE_INDICATOR: bool = true;
    pub const DEFAULT_DISPLAY_RETAIL_PRICE_INDICATOR: bool = true;
    pub const DEFAULT_DISPLAY_NET_PRICE_INDICATOR: bool = true;
    pub const DEFAULT_DISPLAY_BRAZIL_NOTA_FISCAL_INDICATOR: bool = false;
    pub const DEFAULT_REDUCED_QUANTITY_ALERT_INDICATOR: bool = false;
    pub const DEFAULT_SHIPMENT_ALERT_INDICATOR: bool = false;

    /// The extension used when the account has no matching entry.
    #[must_use]
    pub const fn defaults() -> Self {
        Self {
            display_wholesale_price_indicator: Self::DEFAULT_DISPLAY_WHOLESALE_PRICE_INDICATOR,
            display_retail_price_indicator: Self::DEFAULT_DISPLAY_RETAIL_PRICE_INDICATOR,
            display_net_price_indicator: Self::DEFAULT_DISPLAY_NET_PRICE_INDICATOR,
            display_brazil_nota_fiscal_indicator: Self::DEFAULT_DISPLAY_BRAZIL_NOTA_FISCAL_INDICATOR,
            order_reduced_quantity_alert_indicator: Self::DEFAULT_REDUCED_QUANTITY_ALERT_INDICATOR,
            shipment_alert_indicator: Self::DEFAULT_SHIPMENT_ALERT_INDICATOR,
        }
    }
}

impl Default for GlobalSalesCustomerExtension {
    fn default() -> Self {
        Self::defaults()
    }
}
