use serde::Serialize;

/// A payment recognized in a notification text.
///
/// `amount` is the decimal string exactly as it appeared, separators included.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Payment {
    pub sender_name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Matched(Payment),
    NoMatch,
}

impl ExtractionResult {
    pub fn payment(&self) -> Option<&Payment> {
        match self {
            ExtractionResult::Matched(payment) => Some(payment),
            ExtractionResult::NoMatch => None,
        }
    }

    pub fn into_payment(self) -> Option<Payment> {
        match self {
            ExtractionResult::Matched(payment) => Some(payment),
            ExtractionResult::NoMatch => None,
        }
    }
}
