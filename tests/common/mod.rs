//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const VALUES_PATH: &str = "helm/values/values.yaml";

pub fn package_json(version: &str) -> String {
    format!(
        "{{\n  \"name\": \"demo-service\",\n  \"version\": \"{}\",\n  \"scripts\": {{\n    \"start\": \"node index.js\"\n  }}\n}}\n",
        version
    )
}

pub fn package_lock_json(version: &str) -> String {
    format!(
        "{{\n  \"name\": \"demo-service\",\n  \"version\": \"{v}\",\n  \"lockfileVersion\": 3,\n  \"requires\": true,\n  \"packages\": {{\n    \"\": {{\n      \"name\": \"demo-service\",\n      \"version\": \"{v}\"\n    }}\n  }}\n}}\n",
        v = version
    )
}

pub fn values_yaml(version: &str) -> String {
    format!(
        "replicaCount: 1\nimage:\n  repository: registry.example.com/demo-service\n  tag: latest\nappVersion: 9.9.9\nversion: {}\nservice:\n  type: ClusterIP\n  port: 8080\n",
        version
    )
}

/// A project directory holding whichever manifests are requested.
pub fn project(version: &str, with_json: bool, with_values: bool) -> TempDir {
    let dir = TempDir::new().expect("Could not create temp dir");
    if with_json {
        fs::write(dir.path().join("package.json"), package_json(version)).unwrap();
        fs::write(dir.path().join("package-lock.json"), package_lock_json(version)).unwrap();
    }
    if with_values {
        let path = dir.path().join(VALUES_PATH);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, values_yaml(version)).unwrap();
    }
    dir
}

pub fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

pub fn json_version(dir: &Path, file: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(&read(dir, file)).unwrap();
    value["version"].as_str().unwrap().to_string()
}
