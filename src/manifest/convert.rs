//! YAML and JSON conversion of secret manifests

use serde_json::Value;

use super::ManifestError;

/// Text representation currently held by an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Yaml,
    Json,
}

impl TextFormat {
    pub fn label(self) -> &'static str {
        match self {
            TextFormat::Yaml => "YAML",
            TextFormat::Json => "JSON",
        }
    }
}

pub fn yaml_to_json(text: &str) -> Result<Value, ManifestError> {
    if text.trim().is_empty() {
        return Err(ManifestError::Empty);
    }
    Ok(serde_yaml::from_str(text)?)
}

pub fn json_to_yaml(value: &Value) -> Result<String, ManifestError> {
    Ok(serde_yaml::to_string(value)?)
}

/// JSON if the text parses as a JSON object or array, YAML otherwise.
/// JSON is a subset of YAML, so the stricter check goes first.
pub fn detect_format(text: &str) -> TextFormat {
    let trimmed = text.trim_start();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<Value>(text).is_ok()
    {
        TextFormat::Json
    } else {
        TextFormat::Yaml
    }
}

/// Convert editor text to the other representation.
/// Returns the converted text and the format it is now in.
pub fn convert_text(text: &str) -> Result<(String, TextFormat), ManifestError> {
    if text.trim().is_empty() {
        return Err(ManifestError::Empty);
    }

    match detect_format(text) {
        TextFormat::Json => {
            let value: Value = serde_json::from_str(text)?;
            Ok((json_to_yaml(&value)?, TextFormat::Yaml))
        }
        TextFormat::Yaml => {
            let value = yaml_to_json(text)?;
            Ok((serde_json::to_string_pretty(&value)?, TextFormat::Json))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET_YAML: &str = "apiVersion: v1
kind: Secret
metadata:
  name: db-creds
  namespace: prod
data:
  username: YWRtaW4=
";

    #[test]
    fn test_yaml_to_json() {
        let value = yaml_to_json(SECRET_YAML).unwrap();
        assert_eq!(value["kind"], "Secret");
        assert_eq!(value["metadata"]["namespace"], "prod");
        assert_eq!(value["data"]["username"], "YWRtaW4=");
    }

    #[test]
    fn test_yaml_to_json_empty_input() {
        assert!(matches!(yaml_to_json("   \n"), Err(ManifestError::Empty)));
    }

    #[test]
    fn test_yaml_to_json_invalid() {
        let result = yaml_to_json("data: [unclosed");
        assert!(matches!(result, Err(ManifestError::Yaml(_))));
    }

    #[test]
    fn test_json_to_yaml_keeps_key_order() {
        let value = json!({"apiVersion": "v1", "kind": "Secret", "data": {"b": "1", "a": "2"}});
        let yaml = json_to_yaml(&value).unwrap();

        let api = yaml.find("apiVersion").unwrap();
        let kind = yaml.find("kind").unwrap();
        let b = yaml.find("b:").unwrap();
        let a = yaml.find("a:").unwrap();
        assert!(api < kind);
        assert!(b < a);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(SECRET_YAML), TextFormat::Yaml);
        assert_eq!(detect_format(r#"{"kind": "Secret"}"#), TextFormat::Json);
        assert_eq!(detect_format("  [1, 2]"), TextFormat::Json);
        // flow mapping that is valid YAML but not JSON
        assert_eq!(detect_format("{kind: Secret}"), TextFormat::Yaml);
    }

    #[test]
    fn test_convert_yaml_to_json_and_back() {
        let (json_text, format) = convert_text(SECRET_YAML).unwrap();
        assert_eq!(format, TextFormat::Json);
        assert!(json_text.contains("\"namespace\": \"prod\""));

        let (yaml_text, format) = convert_text(&json_text).unwrap();
        assert_eq!(format, TextFormat::Yaml);
        assert_eq!(yaml_to_json(&yaml_text).unwrap(), yaml_to_json(SECRET_YAML).unwrap());
    }

    #[test]
    fn test_convert_empty_text() {
        assert!(matches!(convert_text(""), Err(ManifestError::Empty)));
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(TextFormat::Yaml.label(), "YAML");
        assert_eq!(TextFormat::Json.label(), "JSON");
    }
}
