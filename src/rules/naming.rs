/// `snake_case`: lowercase ASCII letters, digits and underscores, not
/// starting with a digit. Dunder names such as `__init__` qualify.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `CamelCase`: an uppercase ASCII letter followed by ASCII letters or digits.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric())
}
