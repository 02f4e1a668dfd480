//! Card and account number masking

use crate::types::MaskError;

/// Labels that mark an account rather than a card
const ACCOUNT_LABELS: [&str; 2] = ["счет", "account"];

/// Digits in a card number
const CARD_DIGITS: usize = 16;

/// Mask a card number as `dddd dd** **** dddd`
///
/// # Errors
///
/// [`MaskError::InvalidCardNumber`] unless `number` is exactly 16 ASCII digits.
pub fn mask_card(number: &str) -> Result<String, MaskError> {
    if number.len() != CARD_DIGITS || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MaskError::InvalidCardNumber);
    }

    Ok(format!("{} {}** **** {}", &number[..4], &number[4..6], &number[12..]))
}

/// Mask an account number as `**` followed by its last four digits
///
/// # Errors
///
/// [`MaskError::InvalidAccountNumber`] unless `number` is at least 4 ASCII digits.
pub fn mask_account(number: &str) -> Result<String, MaskError> {
    if number.len() < 4 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MaskError::InvalidAccountNumber);
    }

    Ok(format!("**{}", &number[number.len() - 4..]))
}

/// Mask a free-form endpoint such as `Visa Platinum 7000792289606361`
///
/// The trailing token is the number and everything before it is the label.
/// `Счет`/`Account` labels select account masking, any other label selects
/// card masking. A bare number is a card when it has 16 digits and an account
/// otherwise.
///
/// # Returns
///
/// `label masked`, or `label [reason]` when the number cannot be masked.
pub fn mask_endpoint(text: &str) -> String {
    let text = text.trim();
    let (label, number) = match text.rsplit_once(char::is_whitespace) {
        Some((label, number)) => (label.trim(), number),
        None => ("", text),
    };

    let masked = if label.is_empty() {
        if number.len() == CARD_DIGITS {
            mask_card(number)
        } else {
            mask_account(number)
        }
    } else if ACCOUNT_LABELS.contains(&label.to_lowercase().as_str()) {
        mask_account(number)
    } else {
        mask_card(number)
    };

    let masked = masked.unwrap_or_else(|e| format!("[{}]", e));
    if label.is_empty() {
        masked
    } else {
        format!("{} {}", label, masked)
    }
}
