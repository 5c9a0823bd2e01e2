//! Naming conventions shared by the exporter and the client-side element.

/// Name of the event the client-side element fires when a property changes.
///
/// camelCase names become dash-separated: `userName` → `user-name-changed`.
pub fn changed_event_name(property_name: &str) -> String {
    let mut out = String::with_capacity(property_name.len() + 8);
    for (i, c) in property_name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out.push_str("-changed");
    out
}

/// Checks the custom element naming rules browsers enforce on a tag:
/// starts with a lowercase ASCII letter, contains a dash, and only uses
/// lowercase letters, digits, `-`, `.` and `_`.
pub fn is_valid_custom_element_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    starts_with_letter
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_is_dash_separated() {
        assert_eq!(changed_event_name("userName"), "user-name-changed");
        assert_eq!(changed_event_name("isOpenByDefault"), "is-open-by-default-changed");
    }

    #[test]
    fn lowercase_name_is_kept() {
        assert_eq!(changed_event_name("count"), "count-changed");
    }

    #[test]
    fn leading_capital_gets_no_leading_dash() {
        assert_eq!(changed_event_name("Title"), "title-changed");
    }

    #[test]
    fn custom_element_names() {
        assert!(is_valid_custom_element_name("my-widget"));
        assert!(is_valid_custom_element_name("x-1.0_beta"));
        assert!(!is_valid_custom_element_name("widget"));
        assert!(!is_valid_custom_element_name("My-Widget"));
        assert!(!is_valid_custom_element_name("-widget"));
        assert!(!is_valid_custom_element_name("1-widget"));
        assert!(!is_valid_custom_element_name(""));
    }
}
