//! Rendering of JSON values into CSV cells.

use serde_json::Value;

/// Separator of multi-valued columns such as RFMO and region lists.
pub const MULTI_VALUE_DELIMITER: &str = "|";

/// Render a JSON value as CSV cell text.
///
/// Strings are written verbatim and numbers keep their JSON text. `null`
/// becomes an empty cell and booleans are written `True`/`False`, as the
/// published files always have. Arrays and objects are written as compact
/// JSON.
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Join the values of a multi-valued column.
pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(MULTI_VALUE_DELIMITER)
}

/// Join an optional list; a missing list renders as an empty cell.
pub fn join_optional(values: Option<&Vec<String>>) -> String {
    values.map(|values| join_values(values)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell(&Value::Null), "");
        assert_eq!(cell(&json!("PAN")), "PAN");
        assert_eq!(cell(&json!(12)), "12");
        assert_eq!(cell(&json!(-12.5)), "-12.5");
        assert_eq!(cell(&json!(true)), "True");
        assert_eq!(cell(&json!(false)), "False");
        assert_eq!(cell(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(&["WCPFC", "IOTC"]), "WCPFC|IOTC");
        assert_eq!(join_values::<&str>(&[]), "");
    }

    #[test]
    fn test_join_optional() {
        let regions = vec!["IOTC".to_string()];
        assert_eq!(join_optional(Some(&regions)), "IOTC");
        assert_eq!(join_optional(None), "");
    }
}
