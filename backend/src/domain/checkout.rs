//! Simulated card checkout.
//!
//! There is no payment gateway: card details are checked for shape only and,
//! after a fixed processing delay, every well-formed checkout succeeds. Card
//! details are only inspected here and never reach storage.

use std::time::Duration;

use log::{info, warn};
use shared::SubscriptionTier;
use thiserror::Error;

const CARD_NUMBER_DIGITS: usize = 16;
const MIN_HOLDER_NAME_CHARS: usize = 4;
const CVV_DIGITS: usize = 3;
const FORMATTED_CARD_MAX_CHARS: usize = 19;

#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Card number must have 16 digits")]
    InvalidCardNumber,
    #[error("Card holder name must have more than 3 characters")]
    InvalidHolderName,
    #[error("Expiry must be in MM/YY format")]
    InvalidExpiry,
    #[error("CVV must have 3 digits")]
    InvalidCvv,
    #[error("The free plan does not require checkout")]
    FreeTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub number: String,
    pub holder_name: String,
    pub expiry: String,
    pub cvv: String,
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    if !is_digits(month, 2) || !is_digits(year, 2) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Structural card validation; no issuer or Luhn check is performed
pub fn validate_card(card: &CardDetails) -> Result<(), CheckoutError> {
    let digits: String = card.number.chars().filter(|c| !c.is_whitespace()).collect();
    if !is_digits(&digits, CARD_NUMBER_DIGITS) {
        return Err(CheckoutError::InvalidCardNumber);
    }
    if card.holder_name.trim().chars().count() < MIN_HOLDER_NAME_CHARS {
        return Err(CheckoutError::InvalidHolderName);
    }
    if !is_valid_expiry(&card.expiry) {
        return Err(CheckoutError::InvalidExpiry);
    }
    if !is_digits(&card.cvv, CVV_DIGITS) {
        return Err(CheckoutError::InvalidCvv);
    }
    Ok(())
}

/// Group the card number in blocks of four, e.g. "4111 1111 1111 1111"
pub fn format_card_number(value: &str) -> String {
    let cleaned: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
    let formatted = cleaned
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    formatted.chars().take(FORMATTED_CARD_MAX_CHARS).collect()
}

/// Keep the digits and insert the MM/YY separator once the month is complete
pub fn format_expiry(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutService {
    processing_delay: Duration,
}

impl CheckoutService {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Validate the card, wait out the processing delay and confirm the tier
    pub async fn checkout(
        &self,
        tier: SubscriptionTier,
        card: &CardDetails,
    ) -> Result<SubscriptionTier, CheckoutError> {
        if tier == SubscriptionTier::Free {
            return Err(CheckoutError::FreeTier);
        }
        if let Err(e) = validate_card(card) {
            warn!("Rejected checkout for {} plan: {}", tier, e);
            return Err(e);
        }

        info!(
            "Processing checkout for {} plan ({}ms)",
            tier,
            self.processing_delay.as_millis()
        );
        tokio::time::sleep(self.processing_delay).await;
        info!("Checkout approved for {} plan", tier);
        Ok(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn valid_card() -> CardDetails {
        CardDetails {
            number: "4111 1111 1111 1111".to_string(),
            holder_name: "Maria Silva".to_string(),
            expiry: "12/29".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_validate_card_accepts_well_formed() {
        assert_eq!(validate_card(&valid_card()), Ok(()));

        let mut compact = valid_card();
        compact.number = "4111111111111111".to_string();
        assert_eq!(validate_card(&compact), Ok(()));
    }

    #[test]
    fn test_validate_card_rejects_malformed() {
        let cases = [
            (
                CardDetails { number: "4111 1111 1111".to_string(), ..valid_card() },
                CheckoutError::InvalidCardNumber,
            ),
            (
                CardDetails { number: "4111 1111 1111 111a".to_string(), ..valid_card() },
                CheckoutError::InvalidCardNumber,
            ),
            (
                CardDetails { holder_name: "Ana".to_string(), ..valid_card() },
                CheckoutError::InvalidHolderName,
            ),
            (
                CardDetails { expiry: "1229".to_string(), ..valid_card() },
                CheckoutError::InvalidExpiry,
            ),
            (
                CardDetails { expiry: "13/29".to_string(), ..valid_card() },
                CheckoutError::InvalidExpiry,
            ),
            (
                CardDetails { cvv: "12".to_string(), ..valid_card() },
                CheckoutError::InvalidCvv,
            ),
            (
                CardDetails { cvv: "12a".to_string(), ..valid_card() },
                CheckoutError::InvalidCvv,
            ),
        ];
        for (card, expected) in cases {
            assert_eq!(validate_card(&card), Err(expected), "card {:?}", card);
        }
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111 11"), "4111 11");
        assert_eq!(format_card_number("41111111111111112222"), "4111 1111 1111 1111");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1229"), "12/29");
        assert_eq!(format_expiry("12/2999"), "12/29");
        assert_eq!(format_expiry("ab"), "");
    }

    #[tokio::test]
    async fn test_checkout_succeeds_after_delay() {
        let service = CheckoutService::new(Duration::from_millis(20));
        let started = Instant::now();

        let tier = service
            .checkout(SubscriptionTier::Family, &valid_card())
            .await
            .unwrap();

        assert_eq!(tier, SubscriptionTier::Family);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_checkout_rejects_invalid_card_and_free_tier() {
        let service = CheckoutService::new(Duration::from_millis(0));
        let bad_card = CardDetails { cvv: "1".to_string(), ..valid_card() };

        assert_eq!(
            service.checkout(SubscriptionTier::Premium, &bad_card).await,
            Err(CheckoutError::InvalidCvv)
        );
        assert_eq!(
            service.checkout(SubscriptionTier::Free, &valid_card()).await,
            Err(CheckoutError::FreeTier)
        );
    }
}
