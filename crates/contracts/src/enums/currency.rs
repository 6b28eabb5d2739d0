use crate::domain::common::Price;
use serde::{Deserialize, Serialize};

/// Метка валюты для отображения цен
///
/// Меняется только символ: суммы не конвертируются.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    /// "$12,450"
    pub fn format(&self, amount: Price) -> String {
        format!("{}{}", self.symbol(), group_thousands(amount))
    }

    /// "+$150" for add-on badges
    pub fn format_extra(&self, amount: Price) -> String {
        format!("+{}", self.format(amount))
    }
}

fn group_thousands(n: Price) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(Currency::Usd.format(0), "$0");
        assert_eq!(Currency::Usd.format(999), "$999");
        assert_eq!(Currency::Usd.format(1599), "$1,599");
        assert_eq!(Currency::Usd.format(12450), "$12,450");
        assert_eq!(Currency::Inr.format(1234567), "₹1,234,567");
    }

    #[test]
    fn test_format_extra() {
        assert_eq!(Currency::Usd.format_extra(150), "+$150");
    }
}
