//! Plugin constants.

use square_types::Environment;

/// System name the host registers this payment method under.
pub const SYSTEM_NAME: &str = "Payments.SquareUp";

/// Route name of the one-page checkout; the card-form script is injected
/// only when this route renders.
pub const ONE_PAGE_CHECKOUT_ROUTE: &str = "CheckoutOnePage";

/// Card-form script served by the processor's CDN.
pub const PAYMENT_FORM_SCRIPT: &str = "https://web.squarecdn.com/v1/square.js";

/// Sandbox build of the card-form script.
pub const SANDBOX_PAYMENT_FORM_SCRIPT: &str = "https://sandbox.web.squarecdn.com/v1/square.js";

/// Returns the card-form script URL for an environment.
pub fn payment_form_script(environment: Environment) -> &'static str {
    match environment {
        Environment::Sandbox => SANDBOX_PAYMENT_FORM_SCRIPT,
        Environment::Production => PAYMENT_FORM_SCRIPT,
    }
}

/// Fixed message returned when no token came back from the card form.
pub const CARD_DECLINED_MESSAGE: &str =
    "This card could not be authorized. Please check the cc number, cvv, exp. date and zip code.";

/// Fixed message for the unsupported capture-after-authorization operation.
pub const CAPTURE_NOT_SUPPORTED: &str = "Capture method not supported";

/// Fixed message for the unsupported void operation.
pub const VOID_NOT_SUPPORTED: &str = "Void method not supported";

/// Fixed message for the unsupported recurring operations.
pub const RECURRING_NOT_SUPPORTED: &str = "Recurring payments not supported";

/// Prefix on messages built from structured errors in a success envelope.
pub const REMOTE_ERROR_PREFIX: &str = "SquareUp error :";

/// Prefix on messages built from error-status responses and transport faults.
pub const REMOTE_API_ERROR_PREFIX: &str = "SquareUp Api error :";
