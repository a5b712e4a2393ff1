//! Locale resources registered at install time.

/// Resource key of the checkout-page description.
pub const PAYMENT_METHOD_DESCRIPTION_KEY: &str =
    "Plugins.Payments.SquareUp.PaymentMethodDescription";

/// Key prefix under which all of this plugin's resources live; removal at
/// uninstall deletes everything below it.
pub const RESOURCE_PREFIX: &str = "Plugins.Payments.SquareUp";

/// English resource strings, keyed the way the host localization store
/// expects them.
pub const RESOURCES: &[(&str, &str)] = &[
    ("Plugins.Payments.SquareUp.Fields.UseSandbox", "Use Sandbox"),
    (
        "Plugins.Payments.SquareUp.Fields.UseSandbox.Hint",
        "Check to enable Sandbox testing environment",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.SandboxAccessToken",
        "Sandbox access token",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.SandboxApplicationKey",
        "Sandbox application key",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.SandboxLocationId",
        "Sandbox location id",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.AccessToken",
        "Access token for your account",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.ApplicationKey",
        "Application key for the card form",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.LocationId",
        "Store location Id",
    ),
    (
        PAYMENT_METHOD_DESCRIPTION_KEY,
        "Payment processing by SquareUp",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.CardNumber",
        "Credit card number",
    ),
    ("Plugins.Payments.SquareUp.Fields.Cvv", "Card security code"),
    (
        "Plugins.Payments.SquareUp.Fields.ExpirationDate",
        "Expiration date",
    ),
    (
        "Plugins.Payments.SquareUp.Fields.PostalCode",
        "Billing zip code",
    ),
];

/// Looks up a resource string by key.
pub fn resource(key: &str) -> Option<&'static str> {
    RESOURCES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_resource_present() {
        assert_eq!(
            resource(PAYMENT_METHOD_DESCRIPTION_KEY),
            Some("Payment processing by SquareUp")
        );
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(resource("Plugins.Payments.SquareUp.Fields.Nope"), None);
    }

    #[test]
    fn test_all_keys_share_the_removal_prefix() {
        assert!(RESOURCES.iter().all(|(key, _)| key.starts_with(RESOURCE_PREFIX)));
    }
}
