//! Rupee amounts and Indian-style digit grouping.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Whole-rupee amount. The catalogue never deals in paise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub u64);

impl Rupees {
    pub const CURRENCY_SYMBOL: &'static str = "₹";

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }
}

impl ValueObject for Rupees {}

impl From<u64> for Rupees {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Rupees {
    /// `₹89,999`, `₹10,00,000`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", Self::CURRENCY_SYMBOL, group_indian(self.0))
    }
}

/// Group digits the Indian way: the last three digits form one group, every
/// group to the left of it has two digits (`15,00,000`).
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    // Leading group is one or two digits, then pairs.
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        // Digits are ASCII, so byte chunks are valid UTF-8.
        out.push_str(core::str::from_utf8(pair).unwrap_or_default());
    }
    out.push(',');
    out.push_str(tail);
    out
}
