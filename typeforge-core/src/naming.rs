//! Identifier helpers.

/// Converts a string to PascalCase.
///
/// Any character that is not a letter or digit starts a new word and is dropped;
/// the first character of each word is upper-cased and the rest is kept as written.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Returns true if `s` can be written as a bare identifier.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Rewrites `s` as a bare identifier.
///
/// Characters that cannot appear in an identifier become `_`, and a name that
/// would start with a digit (or is empty) gets a leading `_`.
#[must_use]
pub fn to_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if !result.starts_with(|c: char| c.is_alphabetic() || c == '_' || c == '$') {
        result.insert(0, '_');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("message_header"), "MessageHeader");
        assert_eq!(to_pascal_case("role"), "Role");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("itemId"), "ItemId");
        assert_eq!(to_pascal_case("a/b"), "AB");
        assert_eq!(to_pascal_case("shipping address"), "ShippingAddress");
    }

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("Red"), "Red");
        assert_eq!(to_identifier("0"), "_0");
        assert_eq!(to_identifier("a/b"), "a_b");
        assert_eq!(to_identifier("first-name"), "first_name");
        assert_eq!(to_identifier(""), "_");
        assert!(is_identifier(&to_identifier("9 lives")));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("username"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("first-name"));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(""));
    }
}
