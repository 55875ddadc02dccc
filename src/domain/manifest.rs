//! package.json manifest handling.

use serde_json::Value;

use super::AppError;

/// Overwrite the manifest's `name` field, preserving every other field.
///
/// The source must parse as a JSON object; anything else means the scaffolded
/// project cannot be trusted and the caller must abort.
pub fn rewrite_name(source: &str, name: &str) -> Result<String, AppError> {
    let mut manifest: Value =
        serde_json::from_str(source).map_err(|e| AppError::Manifest(e.to_string()))?;

    let Value::Object(fields) = &mut manifest else {
        return Err(AppError::Manifest("expected a top-level object".to_string()));
    };
    fields.insert("name".to_string(), Value::String(name.to_string()));

    let mut rendered =
        serde_json::to_string_pretty(&manifest).map_err(|e| AppError::Manifest(e.to_string()))?;
    rendered.push('\n');
    Ok(rendered)
}
