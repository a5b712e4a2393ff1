//! Parsing of the submitted checkout payment form.

use std::collections::HashMap;

use square_types::dto::PAYMENT_TOKEN_KEY;

/// Form field carrying the tokenized card.
pub const TOKEN_FIELD: &str = "paymenttoken";

/// Form field carrying pipe-delimited client-side validation errors.
pub const ERRORS_FIELD: &str = "Errors";

/// Splits the client-side validation errors out of the submitted form.
/// Empty entries are dropped; order is preserved.
pub fn validation_errors(form: &HashMap<String, String>) -> Vec<String> {
    form.get(ERRORS_FIELD)
        .map(|errors| {
            errors
                .split('|')
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Extracts the opaque card token, stripping the bracket and quote
/// artifacts the client-side JSON serialization leaves behind.
///
/// Returns `None` when the card was declined and no token came back, so
/// payment processing can short-circuit with its fixed error.
pub fn extract_payment_token(form: &HashMap<String, String>) -> Option<String> {
    let raw = form.get(TOKEN_FIELD)?;
    let cleaned = raw.replace('[', "").replace(']', "");
    let token = cleaned.trim().trim_matches('"');
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Builds the per-attempt custom values from the submitted form. An empty
/// map when no token is present, so downstream processing fails with the
/// fixed card-declined message instead of calling the processor.
pub fn payment_info(form: &HashMap<String, String>) -> HashMap<String, String> {
    let mut custom_values = HashMap::new();
    if let Some(token) = extract_payment_token(form) {
        custom_values.insert(PAYMENT_TOKEN_KEY.to_string(), token);
    }
    custom_values
}
