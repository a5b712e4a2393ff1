//! Wire-level bodies and envelopes for the Square Payments API.

use serde::{Deserialize, Serialize};

use square_types::{
    CapturePaymentRequest, CaptureResponse, Money, PaymentId, PostalAddress, RefundPaymentRequest,
    RefundResponse, RemoteError,
};

/// Source id the current create-payment contract expects; the card token
/// itself travels in `verification_token`.
// TODO: confirm against the payments API contract whether this placeholder
// is still required or the token should move into source_id.
pub(crate) const PLACEHOLDER_SOURCE_ID: &str = "1";

#[derive(Debug, Serialize)]
pub(crate) struct MoneyBody {
    amount: i64,
    currency: String,
}

impl From<&Money> for MoneyBody {
    fn from(money: &Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency().as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddressBody {
    address_line_1: String,
    address_line_2: String,
    administrative_district_level_1: String,
    country: String,
    locality: String,
    postal_code: String,
}

impl From<&PostalAddress> for AddressBody {
    fn from(address: &PostalAddress) -> Self {
        Self {
            address_line_1: address.line1.clone(),
            address_line_2: address.line2.clone(),
            administrative_district_level_1: address.region.clone(),
            country: address.country_code.clone(),
            locality: address.city.clone(),
            postal_code: address.postal_code.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePaymentBody {
    idempotency_key: String,
    source_id: String,
    amount_money: MoneyBody,
    verification_token: String,
    autocomplete: bool,
    buyer_email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_address: Option<AddressBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_address: Option<AddressBody>,
    location_id: String,
}

impl From<&CapturePaymentRequest> for CreatePaymentBody {
    fn from(request: &CapturePaymentRequest) -> Self {
        Self {
            idempotency_key: request.idempotency_key.clone(),
            source_id: PLACEHOLDER_SOURCE_ID.to_string(),
            amount_money: MoneyBody::from(&request.amount),
            verification_token: request.source_token.clone(),
            autocomplete: true,
            buyer_email_address: request.buyer_email.clone(),
            billing_address: request.billing_address.as_ref().map(AddressBody::from),
            shipping_address: request.shipping_address.as_ref().map(AddressBody::from),
            location_id: request.location_id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RefundPaymentBody {
    idempotency_key: String,
    amount_money: MoneyBody,
    payment_id: String,
}

impl From<&RefundPaymentRequest> for RefundPaymentBody {
    fn from(request: &RefundPaymentRequest) -> Self {
        Self {
            idempotency_key: request.idempotency_key.clone(),
            amount_money: MoneyBody::from(&request.amount),
            payment_id: request.payment_id.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) detail: Option<String>,
    #[serde(default)]
    pub(crate) field: Option<String>,
}

impl From<ErrorBody> for RemoteError {
    fn from(body: ErrorBody) -> Self {
        Self {
            category: body.category,
            code: body.code,
            detail: body.detail,
            field: body.field,
        }
    }
}

/// Body of any error-status response: a bare structured error list.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) errors: Vec<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentBody {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentEnvelope {
    #[serde(default)]
    pub(crate) payment: Option<PaymentBody>,
    #[serde(default)]
    pub(crate) errors: Vec<ErrorBody>,
}

impl From<PaymentEnvelope> for CaptureResponse {
    fn from(envelope: PaymentEnvelope) -> Self {
        let (payment_id, status) = match envelope.payment {
            Some(payment) => (Some(PaymentId::new(payment.id)), payment.status),
            None => (None, None),
        };
        Self {
            payment_id,
            status,
            errors: envelope.errors.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefundBody {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefundEnvelope {
    #[serde(default)]
    pub(crate) refund: Option<RefundBody>,
    #[serde(default)]
    pub(crate) errors: Vec<ErrorBody>,
}

impl From<RefundEnvelope> for RefundResponse {
    fn from(envelope: RefundEnvelope) -> Self {
        let (refund_id, status) = match envelope.refund {
            Some(refund) => (Some(refund.id), refund.status),
            None => (None, None),
        };
        Self {
            refund_id,
            status,
            errors: envelope.errors.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use square_types::CurrencyCode;

    fn request() -> CapturePaymentRequest {
        CapturePaymentRequest {
            idempotency_key: "key-1".to_string(),
            amount: Money::from_minor(1999, CurrencyCode::new("USD")).unwrap(),
            buyer_email: "buyer@example.com".to_string(),
            billing_address: Some(PostalAddress {
                line1: "1 Main St".to_string(),
                line2: "".to_string(),
                city: "Springfield".to_string(),
                region: "IL".to_string(),
                country_code: "US".to_string(),
                postal_code: "62704".to_string(),
            }),
            shipping_address: None,
            source_token: "cnon:token".to_string(),
            location_id: "L123".to_string(),
        }
    }

    #[test]
    fn test_create_payment_body_shape() {
        let body = CreatePaymentBody::from(&request());
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["idempotency_key"], "key-1");
        assert_eq!(value["source_id"], PLACEHOLDER_SOURCE_ID);
        assert_eq!(value["verification_token"], "cnon:token");
        assert_eq!(value["autocomplete"], true);
        assert_eq!(value["amount_money"]["amount"], 1999);
        assert_eq!(value["amount_money"]["currency"], "USD");
        assert_eq!(value["billing_address"]["administrative_district_level_1"], "IL");
        assert_eq!(value["billing_address"]["country"], "US");
        assert_eq!(value["location_id"], "L123");
        // absent addresses are omitted entirely
        assert!(value.get("shipping_address").is_none());
    }

    #[test]
    fn test_refund_body_shape() {
        let body = RefundPaymentBody::from(&RefundPaymentRequest {
            idempotency_key: "key-2".to_string(),
            amount: Money::from_minor(500, CurrencyCode::new("USD")).unwrap(),
            payment_id: PaymentId::new("PAY123"),
        });
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["idempotency_key"], "key-2");
        assert_eq!(value["payment_id"], "PAY123");
        assert_eq!(value["amount_money"]["amount"], 500);
    }

    #[test]
    fn test_payment_envelope_success() {
        let envelope: PaymentEnvelope = serde_json::from_str(
            r#"{"payment": {"id": "PAY123", "status": "COMPLETED"}}"#,
        )
        .unwrap();
        let response = CaptureResponse::from(envelope);

        assert_eq!(response.payment_id, Some(PaymentId::new("PAY123")));
        assert_eq!(response.status.as_deref(), Some("COMPLETED"));
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_error_envelope_parses_entries() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"errors": [
                {"category": "PAYMENT_METHOD_ERROR", "code": "CARD_DECLINED", "detail": "Card declined."},
                {"code": "INVALID_EXPIRATION"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(envelope.errors.len(), 2);
        let first = RemoteError::from(envelope.errors.into_iter().next().unwrap());
        assert_eq!(first.code, "CARD_DECLINED");
        assert_eq!(first.detail.as_deref(), Some("Card declined."));
    }

    #[test]
    fn test_refund_envelope_success() {
        let envelope: RefundEnvelope =
            serde_json::from_str(r#"{"refund": {"id": "REF1", "status": "PENDING"}}"#).unwrap();
        let response = RefundResponse::from(envelope);

        assert_eq!(response.refund_id.as_deref(), Some("REF1"));
        assert!(response.errors.is_empty());
    }
}
