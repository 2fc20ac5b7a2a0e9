pub mod method;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::summary::Summary;
pub use method::Method;

/// Paths grouped by the method they declare, e.g. `GET => ["/a", "/b"]`.
/// Methods keep the order they were first seen in; each list is sorted.
pub type MethodPaths = IndexMap<Method, Vec<String>>;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expect_object<'a>(
    value: &'a Value,
    location: impl Into<String>,
) -> Result<&'a serde_json::Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::Structure {
        location: location.into(),
        expected: "an object",
        found: kind_of(value),
    })
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

/// Read an OpenAPI document from disk. `.yaml`/`.yml` files are read as YAML,
/// anything else as JSON. The file is fully read before parsing starts.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "Read document");
    if is_yaml(path) {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|source| Error::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        // Non-string keys (e.g. `200:` under responses) become strings here.
        serde_json::to_value(yaml).map_err(|e| Error::Yaml {
            path: path.to_path_buf(),
            source: serde::de::Error::custom(e),
        })
    } else {
        serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Group the paths of `document` by HTTP method.
///
/// A missing `paths` key is an empty document. Path item keys that are not
/// one of the eight method tokens (`parameters`, `summary`, `x-*`, ...) are
/// skipped. Nothing is deduplicated: a path item with both `get` and `GET`
/// lists its path twice under `GET`.
pub fn collect_method_paths(document: &Value) -> Result<MethodPaths> {
    let document = expect_object(document, "document")?;
    let mut mapping = MethodPaths::new();
    let Some(paths) = document.get("paths") else {
        debug!("Document has no paths");
        return Ok(mapping);
    };
    let paths = expect_object(paths, "paths")?;

    for (path, item) in paths {
        let item = expect_object(item, format!("paths.{}", path))?;
        for method in item.keys().filter_map(|k| Method::from_key(k)) {
            mapping.entry(method).or_default().push(path.clone());
        }
    }
    for list in mapping.values_mut() {
        list.sort();
    }
    debug!(paths = paths.len(), methods = mapping.len(), "Collected method paths");
    Ok(mapping)
}

/// Write the mapping as 2-space indented JSON, replacing any existing file.
/// The JSON is encoded in full before the file is touched.
pub fn write_method_paths(mapping: &MethodPaths, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(mapping)?;
    fs::write(path, &s).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "Wrote method paths");
    Ok(())
}

/// Extract the method/path mapping from `openapi_file_path` into
/// `output_file_path`, print a summary, and return the mapping.
pub fn extract_methods_urls(
    openapi_file_path: impl AsRef<Path>,
    output_file_path: impl AsRef<Path>,
) -> Result<MethodPaths> {
    let output_file_path = output_file_path.as_ref();
    let document = read_document(openapi_file_path)?;
    let mapping = collect_method_paths(&document)?;
    write_method_paths(&mapping, output_file_path)?;

    println!("{}", Summary::new(&mapping));
    println!("Output saved to: {}", output_file_path.display());
    Ok(mapping)
}
