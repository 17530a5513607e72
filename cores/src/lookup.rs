use serde_json::Value;

use crate::error::RelayError;

/// The root of a decoded JSON document. Fields reached from it remember their
/// dotted path so that missing or mistyped fields can be reported precisely.
#[derive(Debug, Clone, Copy)]
pub struct JsonField<'a> {
    value: &'a Value,
    scope: &'static str,
}

/// A field below the root, handed back by [`JsonField::field`].
#[derive(Debug, Clone)]
pub struct FieldPath<'a> {
    value: &'a Value,
    path: String,
    scope: &'static str,
}

impl<'a> JsonField<'a> {
    /// `scope` names the document in error messages, e.g. "Event".
    pub fn root(value: &'a Value, scope: &'static str) -> Self {
        Self { value, scope }
    }

    pub fn field(&self, key: &str) -> Result<FieldPath<'a>, RelayError> {
        lookup(self.value, None, key, self.scope)
    }
}

impl<'a> FieldPath<'a> {
    pub fn field(&self, key: &str) -> Result<FieldPath<'a>, RelayError> {
        lookup(self.value, Some(self.path.as_str()), key, self.scope)
    }

    pub fn string(&self) -> Result<&'a str, RelayError> {
        self.value.as_str().ok_or_else(|| RelayError::WrongType {
            scope: self.scope,
            key: self.path.clone(),
            found: kind(self.value),
            expected: "a string",
        })
    }

    pub fn boolean(&self) -> Result<bool, RelayError> {
        self.value.as_bool().ok_or_else(|| RelayError::WrongType {
            scope: self.scope,
            key: self.path.clone(),
            found: kind(self.value),
            expected: "a boolean",
        })
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }
}

fn lookup<'a>(
    value: &'a Value,
    parent: Option<&str>,
    key: &str,
    scope: &'static str,
) -> Result<FieldPath<'a>, RelayError> {
    let path = match parent {
        Some(parent) => [parent, key].join("."),
        None => key.to_owned(),
    };
    let Value::Object(map) = value else {
        return Err(RelayError::WrongType {
            scope,
            key: parent.unwrap_or("$").to_owned(),
            found: kind(value),
            expected: "an object",
        });
    };
    let value = map.get(key).ok_or_else(|| RelayError::MissingKey {
        scope,
        key: path.clone(),
    })?;
    Ok(FieldPath { value, path, scope })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_string() {
        let event = json!({ "data": { "Vm": { "Name": "Test VM" } } });
        let root = JsonField::root(&event, "Event");
        let name = root.field("data").unwrap().field("Vm").unwrap().field("Name").unwrap();
        assert_eq!(name.string().unwrap(), "Test VM");
    }

    #[test]
    fn test_missing_key_reports_dotted_path() {
        let event = json!({ "data": {} });
        let root = JsonField::root(&event, "Event");
        let error = root.field("data").unwrap().field("Host").unwrap_err();
        match error {
            RelayError::MissingKey { key, scope } => {
                assert_eq!(key, "data.Host");
                assert_eq!(scope, "Event");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_indexing_null_is_type_error() {
        let event = json!({ "data": { "Vm": null } });
        let root = JsonField::root(&event, "Event");
        let vm = root.field("data").unwrap().field("Vm").unwrap();
        let error = vm.field("Name").unwrap_err();
        match error {
            RelayError::WrongType { key, found, .. } => {
                assert_eq!(key, "data.Vm");
                assert_eq!(found, "null");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_indexing_non_object_root() {
        let event = json!("test");
        let error = JsonField::root(&event, "Event").field("data").unwrap_err();
        assert!(matches!(error, RelayError::WrongType { found: "a string", .. }));
    }

    #[test]
    fn test_non_string_leaf() {
        let event = json!({ "source": 42 });
        let error = JsonField::root(&event, "Event").field("source").unwrap().string().unwrap_err();
        assert!(matches!(error, RelayError::WrongType { expected: "a string", .. }));
    }
}
