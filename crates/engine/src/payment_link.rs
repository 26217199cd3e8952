//! UPI-style deep links attached to settlement transfers.

use crate::{Currency, Member, Money};

const SCHEME: &str = "upi://pay";

/// Defaults used when building payment links.
///
/// The fallbacks are used when the receiving member has no payment handle or
/// cannot be found in the group anymore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentLinkTemplate {
    pub fallback_handle: String,
    pub fallback_name: String,
    /// Transaction note shown by the payment app.
    pub note: String,
}

impl Default for PaymentLinkTemplate {
    fn default() -> Self {
        Self {
            fallback_handle: "DEMO_UPI@upi".to_string(),
            fallback_name: "Demo".to_string(),
            note: "FairSplit-Demo".to_string(),
        }
    }
}

impl PaymentLinkTemplate {
    /// Builds the link paying `amount` to `recipient`.
    ///
    /// ```rust
    /// use engine::{Currency, Money, PaymentLinkTemplate};
    ///
    /// let link = PaymentLinkTemplate::default().link(None, Money::new(300_00), Currency::Inr);
    /// assert_eq!(
    ///     link,
    ///     "upi://pay?pa=DEMO_UPI%40upi&pn=Demo&am=300.00&cu=INR&tn=FairSplit-Demo"
    /// );
    /// ```
    pub fn link(&self, recipient: Option<&Member>, amount: Money, currency: Currency) -> String {
        let handle = recipient
            .and_then(|m| m.payment_handle.as_deref())
            .unwrap_or(&self.fallback_handle);
        let name = recipient
            .map(|m| m.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.fallback_name);

        format!(
            "{SCHEME}?pa={}&pn={}&am={amount}&cu={}&tn={}",
            urlencoding::encode(handle),
            urlencoding::encode(name),
            currency.code(),
            urlencoding::encode(&self.note),
        )
    }
}
