//! Identifier derivation for generated beans.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `flavor` | [`capitalize`] | `Flavor` |
//! | `isBeanerated` | [`capitalize`] | `Isbeanerated` |
//! | `Coffee` | [`companion_name`] | `CoffeeBean` |
//! | `a.b.Coffee` | [`split_qualified`] | `("a.b", "Coffee")` |

/// Suffix appended to a record name to name its bean.
pub const BEAN_SUFFIX: &str = "Bean";

/// Uppercase the first character and lowercase the rest.
///
/// The tail is lowercased too, so camel-cased names lose their inner humps.
///
/// # Examples
///
/// ```
/// use beanerator_core::naming::capitalize;
///
/// assert_eq!(capitalize("flavor"), "Flavor");
/// assert_eq!(capitalize("isBeanerated"), "Isbeanerated");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Name of the bean generated for a record with the given simple name.
///
/// ```
/// use beanerator_core::naming::companion_name;
///
/// assert_eq!(companion_name("Coffee"), "CoffeeBean");
/// ```
pub fn companion_name(simple_name: &str) -> String {
    format!("{simple_name}{BEAN_SUFFIX}")
}

/// Split a qualified name at its last dot into `(package, simple name)`.
///
/// Returns `None` for the package when the name has no dot.
pub fn split_qualified(qualified: &str) -> (Option<&str>, &str) {
    match qualified.rsplit_once('.') {
        Some((package, simple)) => (Some(package), simple),
        None => (None, qualified),
    }
}

/// Java reserved words, including the literals `true`, `false` and `null`.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Check whether `s` can be used as a Java field or class name.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !JAVA_KEYWORDS.contains(&s)
}
