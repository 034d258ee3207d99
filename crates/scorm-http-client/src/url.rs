//! URL building and path placeholder substitution

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::params::{param_to_string, ParamMap};

/// Characters escaped by `encodeURIComponent`; the wire contract for
/// substituted path segments.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([\w-]+)\}").expect("placeholder pattern is valid")
});

/// Builds the full URL by appending `path` to the base URL and replacing
/// `{name}` placeholders with parameter values.
///
/// Query parameters are not handled here. `api_base_path`, when non-empty,
/// overrides the configured base path for this one call. A placeholder whose
/// name has no entry in `path_params` is left in place verbatim (and
/// percent-encoded like any substituted value).
pub fn build_url(
    base_path: &str,
    path: &str,
    path_params: &ParamMap,
    api_base_path: Option<&str>,
) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let base = match api_base_path {
        Some(base) if !base.is_empty() => base,
        _ => base_path,
    };
    let url = format!("{}{}", base, path);

    PLACEHOLDER
        .replace_all(&url, |caps: &regex::Captures<'_>| {
            let value = match path_params.get(&caps[1]) {
                Some(param) => param_to_string(param),
                None => caps[0].to_string(),
            };
            utf8_percent_encode(&value, PATH_SEGMENT).to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use crate::params::ParamValue;

    use super::*;

    const BASE: &str = "https://cloud.scorm.com/api/v2";

    #[test]
    fn test_plain_path_is_appended_unchanged() {
        let url = build_url(BASE, "/courses", &ParamMap::new(), None);
        assert_eq!(url, "https://cloud.scorm.com/api/v2/courses");
    }

    #[test]
    fn test_missing_leading_slash_is_added() {
        let url = build_url(BASE, "courses", &ParamMap::new(), None);
        assert_eq!(url, "https://cloud.scorm.com/api/v2/courses");
    }

    #[test]
    fn test_placeholder_substitution() {
        let mut params = ParamMap::new();
        params.insert("id".to_string(), ParamValue::from("a145"));

        let url = build_url(BASE, "get/x/{id}", &params, None);
        assert_eq!(url, "https://cloud.scorm.com/api/v2/get/x/a145");
    }

    #[test]
    fn test_substituted_value_is_percent_encoded() {
        let mut params = ParamMap::new();
        params.insert("id".to_string(), ParamValue::from("a/b c"));

        let url = build_url(BASE, "/get/{id}", &params, None);
        assert_eq!(url, "https://cloud.scorm.com/api/v2/get/a%2Fb%20c");
    }

    #[test]
    fn test_absent_key_leaves_literal_token() {
        let url = build_url(BASE, "get/x/{id}", &ParamMap::new(), None);
        assert_eq!(url, "https://cloud.scorm.com/api/v2/get/x/%7Bid%7D");
    }

    #[test]
    fn test_non_empty_override_replaces_base() {
        let url = build_url(BASE, "/courses", &ParamMap::new(), Some("https://other.example"));
        assert_eq!(url, "https://other.example/courses");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let url = build_url(BASE, "/courses", &ParamMap::new(), Some(""));
        assert_eq!(url, "https://cloud.scorm.com/api/v2/courses");
    }

    #[test]
    fn test_hyphenated_placeholder_names() {
        let mut params = ParamMap::new();
        params.insert("course-id".to_string(), ParamValue::Int(7));

        let url = build_url(BASE, "/courses/{course-id}", &params, None);
        assert_eq!(url, "https://cloud.scorm.com/api/v2/courses/7");
    }
}
