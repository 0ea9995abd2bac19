//! Composer manifest patching.
//!
//! The dependency manifest (`composer.json`) is written by the composer
//! bootstrap step; this module owns the single mutation the scaffolder
//! applies to it: adding one PSR-4 autoload mapping. Everything else in the
//! document is preserved: existing keys keep their order, the new key is
//! appended, and output is pretty-printed with slashes unescaped
//! (serde_json never escapes them).

use serde_json::{Map, Value};

use crate::domain::{Namespace, error::DomainError};

/// File name of the dependency manifest inside the project directory.
pub const MANIFEST_FILE: &str = "composer.json";

/// Insert `autoload.psr-4["<Ns>\"] = "src/<Ns>"` into a manifest document.
///
/// Intermediate objects (`autoload`, `autoload.psr-4`) are created when
/// absent. An existing entry under the same key is overwritten; all other
/// entries are untouched.
pub fn register_autoload(manifest: &str, namespace: &Namespace) -> Result<String, DomainError> {
    let mut doc: Value =
        serde_json::from_str(manifest).map_err(|e| DomainError::MalformedManifest {
            reason: e.to_string(),
        })?;

    let root = doc.as_object_mut().ok_or_else(|| DomainError::MalformedManifest {
        reason: "top-level value is not an object".into(),
    })?;

    let psr4 = root
        .entry("autoload")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| DomainError::ManifestFieldNotObject {
            field: "autoload".into(),
        })?
        .entry("psr-4")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| DomainError::ManifestFieldNotObject {
            field: "autoload.psr-4".into(),
        })?;

    psr4.insert(
        namespace.autoload_key(),
        Value::String(namespace.source_path()),
    );

    let mut rendered =
        serde_json::to_string_pretty(&doc).map_err(|e| DomainError::MalformedManifest {
            reason: e.to_string(),
        })?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ns(s: &str) -> Namespace {
        Namespace::new(s).unwrap()
    }

    #[test]
    fn adds_mapping_to_fresh_manifest() {
        let patched = register_autoload("{}", &ns("Blog")).unwrap();
        let doc: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(doc["autoload"]["psr-4"]["Blog\\"], "src/Blog");
    }

    #[test]
    fn preserves_existing_autoload_entries() {
        let input = r#"{
            "require-dev": { "phpspec/phpspec": "~2.0" },
            "autoload": { "psr-4": { "Legacy\\": "lib/Legacy" } }
        }"#;
        let patched = register_autoload(input, &ns("Content")).unwrap();
        let doc: Value = serde_json::from_str(&patched).unwrap();

        assert_eq!(doc["autoload"]["psr-4"]["Legacy\\"], "lib/Legacy");
        assert_eq!(doc["autoload"]["psr-4"]["Content\\"], "src/Content");
        assert_eq!(doc["require-dev"]["phpspec/phpspec"], "~2.0");
        assert_eq!(
            doc["autoload"]["psr-4"].as_object().unwrap().len(),
            2,
            "exactly one entry added"
        );
    }

    #[test]
    fn existing_keys_keep_their_order_and_new_key_is_appended() {
        let input = r#"{ "autoload": { "psr-4": { "B\\": "src/B", "A\\": "src/A" } } }"#;
        let patched = register_autoload(input, &ns("C")).unwrap();
        let doc: Value = serde_json::from_str(&patched).unwrap();

        let keys: Vec<&String> = doc["autoload"]["psr-4"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["B\\", "A\\", "C\\"]);
    }

    #[test]
    fn slashes_are_not_escaped_in_output() {
        let patched = register_autoload("{}", &ns("Widgets")).unwrap();
        assert!(patched.contains("src/Widgets"));
        assert!(!patched.contains("src\\/Widgets"));
    }

    #[test]
    fn output_is_pretty_printed() {
        let patched = register_autoload("{}", &ns("Blog")).unwrap();
        assert!(patched.contains('\n'));
        assert!(patched.ends_with('\n'));
    }

    #[test]
    fn malformed_manifest_is_rejected() {
        assert!(matches!(
            register_autoload("not json", &ns("Blog")),
            Err(DomainError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(matches!(
            register_autoload("[1, 2]", &ns("Blog")),
            Err(DomainError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn non_object_autoload_is_rejected() {
        let input = r#"{ "autoload": "oops" }"#;
        let err = register_autoload(input, &ns("Blog")).unwrap_err();
        assert_eq!(
            err,
            DomainError::ManifestFieldNotObject {
                field: "autoload".into()
            }
        );
    }

    #[test]
    fn repatching_same_namespace_is_stable() {
        let once = register_autoload("{}", &ns("Blog")).unwrap();
        let twice = register_autoload(&once, &ns("Blog")).unwrap();
        assert_eq!(once, twice);
    }
}
