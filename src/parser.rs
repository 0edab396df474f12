//! Extraction of sender and amount from free-text Yape notifications.
//!
//! Three phrasings are recognized, tried in priority order:
//! 1. `Has recibido un pago de <name> por S/ <amount>` (or `Recibiste de ...`)
//! 2. `<name> te envió S/ <amount>`
//! 3. `Recibiste S/ <amount> de <name>`
//!
//! The first pattern that matches decides the result; later patterns are
//! never consulted. Amounts are kept verbatim (`1,500.50` stays a string).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::payment::{ExtractionResult, Payment};

/// Which capture group holds which field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GroupOrder {
    NameThenAmount,
    AmountThenName,
}

struct PatternRule {
    name: &'static str,
    regex: Regex,
    order: GroupOrder,
}

// The trailing `(?:\D|$)` rejects amounts with a third fraction digit.
static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    [
        (
            "payment_received",
            r"(?i)(?:has recibido un pago de|recibiste de)\s+([\w\s]+?)\s+por\s+S/\s*([\d,]+\.\d{2})(?:\D|$)",
            GroupOrder::NameThenAmount,
        ),
        (
            "sender_sent",
            r"(?i)([\w\s]+?)\s+te envió\s+S/\s*([\d,]+\.\d{2})(?:\D|$)",
            GroupOrder::NameThenAmount,
        ),
        (
            "amount_then_sender",
            r"(?i)recibiste\s+S/\s*([\d,]+\.\d{2})\s+de\s+([\w\s]+)",
            GroupOrder::AmountThenName,
        ),
    ]
    .into_iter()
    .map(|(name, pattern, order)| PatternRule {
        name,
        regex: Regex::new(pattern).expect("payment pattern must compile"),
        order,
    })
    .collect()
});

/// Pull the sender name and amount out of a notification text.
///
/// Never fails: anything unrecognized is [`ExtractionResult::NoMatch`].
pub fn extract(text: &str) -> ExtractionResult {
    let text = text.trim();

    for rule in PATTERN_RULES.iter() {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };

        let (name_idx, amount_idx) = match rule.order {
            GroupOrder::NameThenAmount => (1, 2),
            GroupOrder::AmountThenName => (2, 1),
        };

        let sender_name = caps.get(name_idx).map_or("", |m| m.as_str().trim());
        let amount = caps.get(amount_idx).map_or("", |m| m.as_str().trim());

        tracing::debug!(pattern = rule.name, "Payment pattern matched");

        if sender_name.is_empty() || amount.is_empty() {
            return ExtractionResult::NoMatch;
        }

        return ExtractionResult::Matched(Payment {
            sender_name: sender_name.to_string(),
            amount: amount.to_string(),
        });
    }

    ExtractionResult::NoMatch
}
