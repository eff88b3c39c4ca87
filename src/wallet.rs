//! Running sales balance
use super::utils::{format_money, parse_money};
use tracing::warn;

/// Single running balance in cents, credited by sales. There is no debit
/// path other than the guarded reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalletLedger {
    cents: i64,
}

impl WalletLedger {
    /// Rebuild from the persisted fixed-2 string. An absent or unreadable
    /// value falls back to a zero balance; the fallback is logged but not
    /// surfaced to the user.
    pub fn from_persisted(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(raw) => match parse_money(raw) {
                Some(cents) => Self { cents },
                None => {
                    warn!(raw, "unreadable wallet balance, falling back to 0");
                    Self::default()
                }
            },
        }
    }

    pub fn balance_cents(&self) -> i64 {
        self.cents
    }

    /// Credit the balance by a sale's value and return the new balance.
    pub fn credit(&mut self, cents: i64) -> i64 {
        self.cents += cents;
        self.cents
    }

    /// Set the balance to exactly zero. Guarded by the caller.
    pub fn reset(&mut self) {
        self.cents = 0;
    }

    /// Fixed-2 decimal form used for both persistence and display.
    pub fn to_persisted(&self) -> String {
        format_money(self.cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_accumulate() {
        let mut wallet = WalletLedger::default();
        assert_eq!(wallet.credit(2_200), 2_200);
        assert_eq!(wallet.credit(1_100), 3_300);
        assert_eq!(wallet.to_persisted(), "33.00");
    }

    #[test]
    fn invalid_persisted_value_loads_as_zero() {
        assert_eq!(WalletLedger::from_persisted(Some("garbage")).balance_cents(), 0);
        assert_eq!(WalletLedger::from_persisted(None).balance_cents(), 0);
        assert_eq!(WalletLedger::from_persisted(Some("12.50")).balance_cents(), 1_250);
    }

    #[test]
    fn reset_is_exact_zero() {
        let mut wallet = WalletLedger::from_persisted(Some("99.99"));
        wallet.reset();
        assert_eq!(wallet.balance_cents(), 0);
        assert_eq!(wallet.to_persisted(), "0.00");
    }
}
