/// Currency code used by a group and its money values.
///
/// Groups are mono-currency (`INR`), but the engine models currency explicitly
/// so payment links never hard-code the code string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Inr,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }
}
