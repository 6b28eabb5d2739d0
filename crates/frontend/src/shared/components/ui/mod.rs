//! Site-wide form and action primitives styled by `static/styles.css`

mod badge;
mod button;
mod field;

pub use badge::Badge;
pub use button::Button;
pub use field::{Input, Select, Textarea};

/// BEM modifier for `block`: the requested variant when it is one of `known`,
/// otherwise `fallback`
fn modifier(block: &str, requested: Option<String>, known: &[&str], fallback: &str) -> String {
    let variant = requested
        .filter(|v| known.contains(&v.as_str()))
        .unwrap_or_else(|| fallback.to_string());
    format!("{}--{}", block, variant)
}

#[cfg(test)]
mod tests {
    use super::modifier;

    #[test]
    fn test_modifier() {
        let known = ["primary", "outline"];
        assert_eq!(
            modifier("button", Some("outline".into()), &known, "primary"),
            "button--outline"
        );
        assert_eq!(modifier("button", Some("fancy".into()), &known, "primary"), "button--primary");
        assert_eq!(modifier("badge", None, &known, "neutral"), "badge--neutral");
    }
}
