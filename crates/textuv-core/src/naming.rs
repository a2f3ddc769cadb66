//! Project name normalization
//!
//! A project name is free-form user input. Two identifiers are derived from it:
//! the Python package name (`[a-z_][a-z0-9_]*`) and the console script name
//! (`[a-z0-9][a-z0-9-]*`). Neither derivation can fail; inputs that would
//! produce an empty or badly-led identifier get a fallback prefix.

const PACKAGE_FALLBACK_PREFIX: &str = "a_";
const SCRIPT_FALLBACK_PREFIX: &str = "a-";

/// Derive the importable Python package name from a project name
///
/// `"My-App!"` becomes `"my_app"`, `"123"` becomes `"a_123"`.
pub fn derive_package_name(raw: &str) -> String {
    let slug: String = raw
        .trim()
        .to_lowercase()
        .replace('-', "_")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    let valid_start = slug
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_');

    if valid_start {
        slug
    } else {
        format!("{}{}", PACKAGE_FALLBACK_PREFIX, slug)
    }
}

/// Derive the installed command name from a project name
///
/// `"My_App!"` becomes `"my-app"`. A slug made only of hyphens carries no
/// name at all and is treated as empty, so `"---"`, `"-"` and `"_-_"` all
/// become `"a-"` rather than keeping the hyphens after the prefix.
pub fn derive_script_name(raw: &str) -> String {
    let mut slug: String = raw
        .trim()
        .to_lowercase()
        .replace('_', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    if slug.chars().all(|c| c == '-') {
        slug.clear();
    }

    let valid_start = slug
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    if valid_start {
        slug
    } else {
        format!("{}{}", SCRIPT_FALLBACK_PREFIX, slug)
    }
}

/// Check a string against `[a-z_][a-z0-9_]*`
pub fn is_valid_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Check a string against `[a-z0-9][a-z0-9-]*`
pub fn is_valid_script_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_package_name_examples() {
        assert_eq!(derive_package_name("My-App!"), "my_app");
        assert_eq!(derive_package_name("123"), "a_123");
        assert_eq!(derive_package_name(""), "a_");
        assert_eq!(derive_package_name("  spaced name  "), "spacedname");
        assert_eq!(derive_package_name("_private"), "_private");
    }

    #[test]
    fn test_script_name_examples() {
        assert_eq!(derive_script_name("My_App!"), "my-app");
        assert_eq!(derive_script_name("---"), "a-");
        assert_eq!(derive_script_name("_-_"), "a-");
        assert_eq!(derive_script_name("-"), "a-");
        assert_eq!(derive_script_name("!!!"), "a-");
        assert_eq!(derive_script_name(""), "a-");
        assert_eq!(derive_script_name("9lives"), "9lives");
    }

    #[test]
    fn test_fallback_keeps_filtered_remainder() {
        // Leading digit is valid for scripts but not for packages
        assert_eq!(derive_package_name("2048-game"), "a_2048_game");
        assert_eq!(derive_script_name("2048_game"), "2048-game");
        assert_eq!(derive_script_name("-leading"), "a--leading");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(derive_package_name("Café-Zoë"), "caf_zo");
        assert_eq!(derive_script_name("日本"), "a-");
    }

    #[test]
    fn test_validators() {
        assert!(is_valid_package_name("my_app"));
        assert!(is_valid_package_name("_"));
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("1app"));
        assert!(!is_valid_package_name("my-app"));

        assert!(is_valid_script_name("my-app"));
        assert!(is_valid_script_name("1app"));
        assert!(!is_valid_script_name(""));
        assert!(!is_valid_script_name("-app"));
        assert!(!is_valid_script_name("my_app"));
    }

    proptest! {
        #[test]
        fn prop_package_name_always_valid(raw in any::<String>()) {
            let name = derive_package_name(&raw);
            prop_assert!(!name.is_empty());
            prop_assert!(is_valid_package_name(&name), "invalid package name {:?}", name);
        }

        #[test]
        fn prop_script_name_always_valid(raw in any::<String>()) {
            let name = derive_script_name(&raw);
            prop_assert!(!name.is_empty());
            prop_assert!(is_valid_script_name(&name), "invalid script name {:?}", name);
        }

        #[test]
        fn prop_valid_names_are_fixed_points(raw in "[a-z_][a-z0-9_]{0,16}") {
            prop_assert_eq!(derive_package_name(&raw), raw);
        }
    }
}
