//! Locale-aware price and rating formatting.
//!
//! Prices are Brazilian real amounts. The locale only decides separators and
//! symbol spacing; the amount passed in is always the raw listing price.

use std::fmt::Write as _;

/// Supported display locales for currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceLocale {
    /// `R$ 1.234,56`
    #[default]
    PtBr,
    /// `R$1,234.56`
    EnUs,
}

impl PriceLocale {
    /// Parses a BCP 47 tag such as `pt-BR` or `en_US`.
    ///
    /// Returns `None` for unsupported locales.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" | "pt" => Some(Self::PtBr),
            "en-us" | "en" => Some(Self::EnUs),
            _ => None,
        }
    }

    const fn separators(self) -> (char, char) {
        match self {
            Self::PtBr => ('.', ','),
            Self::EnUs => (',', '.'),
        }
    }

    /// Formats an amount with two decimals and grouped thousands.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::ui::format::PriceLocale;
    ///
    /// assert_eq!(PriceLocale::PtBr.format_price(24.90), "R$ 24,90");
    /// assert_eq!(PriceLocale::EnUs.format_price(1234.5), "R$1,234.50");
    /// ```
    #[must_use]
    pub fn format_price(self, amount: f64) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = (amount.max(0.0) * 100.0).round() as u64;
        let (group_sep, decimal_sep) = self.separators();

        let digits = (cents / 100).to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(group_sep);
            }
            grouped.push(digit);
        }

        let symbol = match self {
            Self::PtBr => "R$ ",
            Self::EnUs => "R$",
        };

        let mut out = String::with_capacity(grouped.len() + 6);
        let _ = write!(out, "{symbol}{grouped}{decimal_sep}{:02}", cents % 100);
        out
    }
}

/// Formats a rating or reputation with one decimal, e.g. `★ 4.8`.
#[must_use]
pub fn format_rating(score: f64) -> String {
    format!("★ {score:.1}")
}
