//! Version updates for the JSON manifests (`package.json`, `package-lock.json`).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BumpError, Result};

/// A JSON manifest loaded into memory, keeping key order.
#[derive(Debug, Clone)]
pub struct JsonManifest {
    pub path: PathBuf,
    pub document: Value,
    trailing_newline: bool,
}

impl JsonManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document = serde_json::from_str(&content)?;
        Ok(JsonManifest {
            path: path.to_path_buf(),
            document,
            trailing_newline: content.ends_with('\n'),
        })
    }

    /// Serialized form, ending with a newline only if the loaded file did.
    pub fn render(&self) -> Result<String> {
        to_pretty(&self.document, self.trailing_newline)
    }

    pub fn save(&self) -> Result<()> {
        let rendered = self.render()?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

/// Sets the top-level `version` field, appending it when absent.
pub fn set_version(document: &mut Value, version: &str) -> Result<()> {
    let object = document
        .as_object_mut()
        .ok_or_else(|| BumpError::manifest("top-level value is not an object"))?;
    object.insert("version".to_string(), Value::String(version.to_string()));
    Ok(())
}

/// Sets the lockfile version, including the root entry under `packages[""]`
/// that lockfile v2/v3 carry. That entry is updated only if it exists.
pub fn set_lock_version(document: &mut Value, version: &str) -> Result<()> {
    set_version(document, version)?;
    if let Some(root_package) = document
        .get_mut("packages")
        .and_then(|packages| packages.get_mut(""))
        .and_then(Value::as_object_mut)
    {
        if root_package.contains_key("version") {
            root_package.insert("version".to_string(), Value::String(version.to_string()));
        }
    }
    Ok(())
}

/// The current top-level `version` string, if any.
pub fn current_version(document: &Value) -> Option<&str> {
    document.get("version").and_then(Value::as_str)
}

/// Serializes with two-space indentation.
pub fn to_pretty(document: &Value, trailing_newline: bool) -> Result<String> {
    let mut out = serde_json::to_string_pretty(document)?;
    if trailing_newline {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_version_overwrites() {
        let mut doc = json!({"name": "app", "version": "1.0.0"});
        set_version(&mut doc, "1.0.1").unwrap();
        assert_eq!(current_version(&doc), Some("1.0.1"));
    }

    #[test]
    fn test_set_version_appends_missing_field() {
        let mut doc = json!({"name": "app", "private": true});
        set_version(&mut doc, "0.1.0").unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "private", "version"]);
    }

    #[test]
    fn test_set_version_rejects_non_object() {
        let mut doc = json!(["1.0.0"]);
        let err = set_version(&mut doc, "2.0.0").unwrap_err();
        assert!(matches!(err, BumpError::Manifest(_)));
    }

    #[test]
    fn test_key_order_preserved() {
        let input = r#"{"version": "1.0.0", "name": "app", "dependencies": {"b": "1", "a": "2"}}"#;
        let mut doc: Value = serde_json::from_str(input).unwrap();
        set_version(&mut doc, "1.1.0").unwrap();
        let out = to_pretty(&doc, false).unwrap();
        let version_at = out.find("\"version\"").unwrap();
        let name_at = out.find("\"name\"").unwrap();
        let b_at = out.find("\"b\"").unwrap();
        let a_at = out.find("\"a\"").unwrap();
        assert!(version_at < name_at);
        assert!(b_at < a_at);
    }

    #[test]
    fn test_pretty_uses_two_spaces() {
        let doc = json!({"name": "app", "version": "1.0.0"});
        assert_eq!(
            to_pretty(&doc, false).unwrap(),
            "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\"\n}"
        );
        assert!(to_pretty(&doc, true).unwrap().ends_with("}\n"));
    }

    #[test]
    fn test_manifest_keeps_trailing_newline() {
        let dir = tempfile::TempDir::new().unwrap();
        let with = dir.path().join("with.json");
        let without = dir.path().join("without.json");
        fs::write(&with, "{\n  \"version\": \"1.0.0\"\n}\n").unwrap();
        fs::write(&without, "{\"version\":\"1.0.0\"}").unwrap();

        for path in [&with, &without] {
            let mut manifest = JsonManifest::load(path).unwrap();
            set_version(&mut manifest.document, "1.0.1").unwrap();
            manifest.save().unwrap();
        }

        assert_eq!(
            fs::read_to_string(&with).unwrap(),
            "{\n  \"version\": \"1.0.1\"\n}\n"
        );
        assert_eq!(
            fs::read_to_string(&without).unwrap(),
            "{\n  \"version\": \"1.0.1\"\n}"
        );
    }

    #[test]
    fn test_load_malformed_is_json_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            JsonManifest::load(&path).unwrap_err(),
            BumpError::Json(_)
        ));
    }

    #[test]
    fn test_lock_root_package_updated_when_present() {
        let mut doc = json!({
            "name": "app",
            "version": "1.0.0",
            "lockfileVersion": 3,
            "packages": {
                "": {"name": "app", "version": "1.0.0"},
                "node_modules/semver": {"version": "7.5.4"}
            }
        });
        set_lock_version(&mut doc, "1.1.0").unwrap();
        assert_eq!(doc["version"], "1.1.0");
        assert_eq!(doc["packages"][""]["version"], "1.1.0");
        assert_eq!(doc["packages"]["node_modules/semver"]["version"], "7.5.4");
    }

    #[test]
    fn test_lock_root_package_not_created() {
        let mut doc = json!({
            "version": "1.0.0",
            "packages": {"": {"name": "app"}}
        });
        set_lock_version(&mut doc, "1.1.0").unwrap();
        assert!(doc["packages"][""].get("version").is_none());

        let mut v1 = json!({"version": "1.0.0", "lockfileVersion": 1});
        set_lock_version(&mut v1, "1.1.0").unwrap();
        assert!(v1.get("packages").is_none());
    }
}
