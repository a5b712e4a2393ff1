//! Builds remote payment requests from host order data.

use rust_decimal::Decimal;
use uuid::Uuid;

use square_types::{
    AddressId, CapturePaymentRequest, CheckoutError, CurrencyCode, CustomerId, DependencyError,
    Money, PaymentId, PostalAddress, RefundPaymentRequest, StoreDirectory,
};

/// Generates a unique idempotency key for one charge or refund attempt.
///
/// Fresh per attempt; a true retry of the *same* attempt should reuse the
/// key it was issued, which the remote API's idempotency contract turns
/// into a no-op instead of a second charge.
pub fn new_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

/// Resolves an address record into the processor's representation.
///
/// Every lookup failure aborts assembly; a partially resolved address is
/// never sent.
async fn resolve_address<D: StoreDirectory>(
    directory: &D,
    id: AddressId,
) -> Result<PostalAddress, DependencyError> {
    let record = directory
        .address(id)
        .await
        .ok_or(DependencyError::Address(id))?;
    let region = directory
        .state_abbreviation(record.state_id)
        .await
        .ok_or(DependencyError::State(record.state_id))?;
    let country_code = directory
        .country_code(record.country_id)
        .await
        .ok_or(DependencyError::Country(record.country_id))?;

    Ok(PostalAddress {
        line1: record.line1,
        line2: record.line2,
        city: record.city,
        region,
        country_code,
        postal_code: record.postal_code,
    })
}

/// Assembles a create-payment request for one checkout attempt.
///
/// Resolves the customer, the primary store currency, and both addresses
/// through the directory; any missing record is fatal before anything goes
/// over the wire. The amount is the order total rounded to two decimals and
/// scaled to minor units.
pub async fn capture_request<D: StoreDirectory>(
    directory: &D,
    customer_id: CustomerId,
    order_total: Decimal,
    source_token: &str,
    location_id: &str,
) -> Result<CapturePaymentRequest, CheckoutError> {
    let customer = directory
        .customer(customer_id)
        .await
        .ok_or(DependencyError::Customer(customer_id))?;
    let currency = directory
        .primary_currency()
        .await
        .ok_or(DependencyError::Currency)?;

    let billing_address = match customer.billing_address_id {
        Some(id) => Some(resolve_address(directory, id).await?),
        None => None,
    };
    let shipping_address = match customer.shipping_address_id {
        Some(id) => Some(resolve_address(directory, id).await?),
        None => None,
    };

    Ok(CapturePaymentRequest {
        idempotency_key: new_idempotency_key(),
        amount: Money::from_major(order_total, currency)?,
        buyer_email: customer.email,
        billing_address,
        shipping_address,
        source_token: source_token.to_string(),
        location_id: location_id.to_string(),
    })
}

/// Assembles a refund call from the stored transaction id and amount.
pub fn refund_request(
    amount_to_refund: Decimal,
    currency: CurrencyCode,
    payment_id: PaymentId,
) -> Result<RefundPaymentRequest, CheckoutError> {
    Ok(RefundPaymentRequest {
        idempotency_key: new_idempotency_key(),
        amount: Money::from_major(amount_to_refund, currency)?,
        payment_id,
    })
}
