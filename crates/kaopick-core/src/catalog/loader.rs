//! Parsing and validation of the JSON catalog document.
//!
//! The document is deserialised into loose `Raw*` structs first, then
//! checked node by node and converted into the strict [`Category`] tree.
//! Nothing is returned unless the whole document validates.

use serde::Deserialize;
use serde_json::Value;

use super::model::{Catalog, Category, CategoryBody};
use crate::error::{CoreError, CoreResult};
use crate::nfc_string;

/// Loose on-disk shape of a category node.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategory {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    categories: Option<Vec<RawCategory>>,
    #[serde(default)]
    emoticons: Option<Vec<Value>>,
}

/// Parses a catalog document and builds the immutable [`Catalog`].
///
/// # Errors
///
/// Returns [`CoreError::MalformedCatalog`] when the text is not JSON, the
/// root is not an array, a node has no (or a blank) `name`, a node carries
/// unknown fields, or an emoticon is not a non-empty string.
pub fn load_catalog(document: &str) -> CoreResult<Catalog> {
    let raw: Vec<RawCategory> =
        serde_json::from_str(document).map_err(|e| CoreError::MalformedCatalog(e.to_string()))?;

    let mut trail = Vec::new();
    let categories = raw
        .into_iter()
        .enumerate()
        .map(|(pos, node)| convert(node, pos, &mut trail))
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(Catalog::new(categories))
}

fn convert(raw: RawCategory, position: usize, trail: &mut Vec<String>) -> CoreResult<Category> {
    let name = match raw.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => nfc_string(name),
        _ => {
            return Err(CoreError::MalformedCatalog(format!(
                "category #{position} under {} is missing `name`",
                describe(trail)
            )))
        }
    };

    trail.push(name.clone());
    let emoticons = raw
        .emoticons
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, value)| convert_emoticon(value, i, trail))
        .collect::<CoreResult<Vec<_>>>();
    let body = emoticons.and_then(|emoticons| match raw.categories {
        Some(children) if !children.is_empty() => {
            let children = children
                .into_iter()
                .enumerate()
                .map(|(pos, child)| convert(child, pos, trail))
                .collect::<CoreResult<Vec<_>>>()?;
            Ok(CategoryBody::Branch {
                emoticons,
                children,
            })
        }
        _ => Ok(CategoryBody::Leaf { emoticons }),
    });
    trail.pop();

    Ok(Category::with_body(name, body?))
}

fn convert_emoticon(value: Value, position: usize, trail: &[String]) -> CoreResult<String> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(nfc_string(&s)),
        Value::String(_) => Err(CoreError::MalformedCatalog(format!(
            "emoticon #{position} in {} is empty",
            describe(trail)
        ))),
        other => Err(CoreError::MalformedCatalog(format!(
            "emoticon #{position} in {} is not a string: {other}",
            describe(trail)
        ))),
    }
}

fn describe(trail: &[String]) -> String {
    if trail.is_empty() {
        "the root".to_string()
    } else {
        format!("\"{}\"", trail.join(" > "))
    }
}

/// The starter catalog written when no catalog file exists yet.
pub fn default_document() -> String {
    let doc = serde_json::json!([
        {
            "name": "Positive",
            "categories": [
                { "name": "Joy", "emoticons": ["(* ^ ω ^)", "(´ ∀ ` *)", "(o^▽^o)", "(≧◡≦)"] },
                { "name": "Love", "emoticons": ["(ﾉ´ з `)ノ", "(♡μ_μ)", "(*♡∀♡)", "(´ ω `♡)"] },
                { "name": "Embarrassment", "emoticons": ["(⌒_⌒;)", "(o^ ^o)", "(*/ω＼)"] }
            ]
        },
        {
            "name": "Negative",
            "categories": [
                { "name": "Anger", "emoticons": ["(#°Д°)", "(＃`Д´)", "(╬ Ò﹏Ó)"] },
                { "name": "Sadness", "emoticons": ["(T_T)", "(ノ_<。)", "(╥﹏╥)"] }
            ]
        },
        {
            "name": "Animals",
            "categories": [
                { "name": "Cat", "emoticons": ["(=^･ω･^=)", "(^・o・^)ﾉ”"] },
                { "name": "Bear", "emoticons": ["ʕ •ᴥ• ʔ", "ʕ ᵔᴥᵔ ʔ"] }
            ]
        }
    ]);
    // Serialising a `Value` built from literals cannot fail.
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(catalog: &Catalog) -> Vec<&str> {
        catalog.entries().iter().map(|e| e.text()).collect()
    }

    #[test]
    fn loads_two_level_document() {
        let doc = r#"[
            {"name": "Positive", "categories": [
                {"name": "Joy", "emoticons": ["(* ^ ω ^)"]},
                {"name": "Love", "emoticons": ["(ﾉ´ з `)ノ"]}
            ]},
            {"name": "Negative", "categories": [
                {"name": "Anger", "emoticons": ["(#°Д°)"]}
            ]}
        ]"#;

        let catalog = load_catalog(doc).unwrap();

        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(texts(&catalog), vec!["(* ^ ω ^)", "(ﾉ´ з `)ノ", "(#°Д°)"]);
        assert_eq!(
            catalog.entries()[1].path(),
            &["Positive".to_string(), "Love".to_string()]
        );
    }

    #[test]
    fn loads_flat_leaves() {
        let doc = r#"[
            {"name": "Happy", "emoticons": ["(^_^)", "(*‿*)"]},
            {"name": "Sad", "emoticons": ["(T_T)"]}
        ]"#;

        let catalog = load_catalog(doc).unwrap();
        assert_eq!(texts(&catalog), vec!["(^_^)", "(*‿*)", "(T_T)"]);
    }

    #[test]
    fn missing_name_is_malformed() {
        let doc = r#"[{"emoticons": ["(^_^)"]}]"#;

        let err = load_catalog(doc).unwrap_err();

        assert!(matches!(err, CoreError::MalformedCatalog(ref m) if m.contains("missing `name`")));
    }

    #[test]
    fn missing_name_in_nested_node_reports_parent() {
        let doc = r#"[{"name": "Positive", "categories": [{"emoticons": []}]}]"#;

        let err = load_catalog(doc).unwrap_err();

        assert!(err.to_string().contains("\"Positive\""));
    }

    #[test]
    fn blank_name_is_malformed() {
        let err = load_catalog(r#"[{"name": "   "}]"#).unwrap_err();
        assert!(matches!(err, CoreError::MalformedCatalog(_)));
    }

    #[test]
    fn non_string_emoticon_is_malformed() {
        let doc = r#"[{"name": "Happy", "emoticons": ["(^_^)", 42]}]"#;

        let err = load_catalog(doc).unwrap_err();

        assert!(matches!(err, CoreError::MalformedCatalog(ref m) if m.contains("not a string")));
        assert!(err.to_string().contains("\"Happy\""));
    }

    #[test]
    fn empty_emoticon_is_malformed() {
        let err = load_catalog(r#"[{"name": "Happy", "emoticons": [""]}]"#).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn unknown_field_is_malformed() {
        let doc = r#"[{"name": "Happy", "emoticons": [], "color": "red"}]"#;
        let err = load_catalog(doc).unwrap_err();
        assert!(matches!(err, CoreError::MalformedCatalog(_)));
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let err = load_catalog(r#"[{"name": "Happy", "categories": "nope"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::MalformedCatalog(_)));
    }

    #[test]
    fn root_must_be_an_array() {
        let err = load_catalog(r#"{"name": "Happy"}"#).unwrap_err();
        assert!(matches!(err, CoreError::MalformedCatalog(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = load_catalog("[{").unwrap_err();
        assert!(matches!(err, CoreError::MalformedCatalog(_)));
    }

    #[test]
    fn node_without_children_or_emoticons_is_empty_leaf() {
        let catalog = load_catalog(r#"[{"name": "Empty"}, {"name": "Nulls", "emoticons": null, "categories": null}]"#)
            .unwrap();

        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.categories()[0].body(),
            CategoryBody::Leaf { emoticons } if emoticons.is_empty()
        ));
        assert_eq!(catalog.categories()[1].name(), "Nulls");
    }

    #[test]
    fn mixed_node_keeps_own_emoticons_first() {
        let doc = r#"[{"name": "Animals", "emoticons": ["own"],
                       "categories": [{"name": "Cat", "emoticons": ["child"]}]}]"#;

        let catalog = load_catalog(doc).unwrap();

        assert_eq!(texts(&catalog), vec!["own", "child"]);
        assert!(matches!(catalog.categories()[0].body(), CategoryBody::Branch { .. }));
    }

    #[test]
    fn strings_are_nfc_normalised() {
        // "e" followed by a combining acute accent.
        let doc = "[{\"name\": \"Cafe\u{301}\", \"emoticons\": [\"e\u{301}\"]}]";

        let catalog = load_catalog(doc).unwrap();

        assert_eq!(catalog.entries()[0].text(), "\u{e9}");
        assert_eq!(catalog.categories()[0].name(), "Caf\u{e9}");
    }

    #[test]
    fn names_are_trimmed() {
        let catalog = load_catalog(r#"[{"name": "  Joy ", "emoticons": ["x"]}]"#).unwrap();
        assert_eq!(catalog.entries()[0].path(), &["Joy".to_string()]);
    }

    #[test]
    fn default_document_is_loadable() {
        let catalog = load_catalog(&default_document()).unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(catalog.categories()[0].name(), "Positive");
        assert_eq!(catalog.entries()[0].text(), "(* ^ ω ^)");
    }
}
