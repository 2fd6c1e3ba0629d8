//! Schema validation for request and response payloads.
//!
//! Each entity shape is described once as an [`EntitySchema`]; the server checks
//! request bodies against the insertable schemas and the client checks response
//! bodies against the record schemas, so the two sides cannot drift.

use crate::error::ValidationError;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-blank string.
    Text,
    /// Non-blank absolute http(s) URL.
    Url,
    /// Whole number in the i32 range.
    Integer,
    /// RFC 3339 timestamp string.
    Timestamp,
}

#[derive(Clone, Copy, Debug)]
pub struct ValidationRule {
    pub field: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub minimum: Option<i64>,
}

impl ValidationRule {
    pub const fn text(field: &'static str) -> Self {
        Self::new(field, FieldKind::Text)
    }

    pub const fn url(field: &'static str) -> Self {
        Self::new(field, FieldKind::Url)
    }

    pub const fn integer(field: &'static str) -> Self {
        Self::new(field, FieldKind::Integer)
    }

    pub const fn timestamp(field: &'static str) -> Self {
        Self::new(field, FieldKind::Timestamp)
    }

    /// Server-assigned primary key: integer >= 1.
    pub const fn id() -> Self {
        Self {
            field: "id",
            kind: FieldKind::Integer,
            required: true,
            minimum: Some(1),
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    const fn new(field: &'static str, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            required: true,
            minimum: None,
        }
    }
}

/// Ordered field rules for one payload shape. Order decides which error is reported.
#[derive(Clone, Copy, Debug)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub rules: &'static [ValidationRule],
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a JSON object. Stops at the first failing rule in declaration order.
    pub fn validate(value: &Value, schema: &EntitySchema) -> Result<(), ValidationError> {
        let obj = value.as_object().ok_or_else(|| {
            ValidationError::body(format!("{} must be a JSON object", schema.entity))
        })?;
        for rule in schema.rules {
            validate_field(obj, rule)?;
        }
        Ok(())
    }

    /// Validate a JSON array of objects; error paths are prefixed with the element index.
    pub fn validate_list(value: &Value, schema: &EntitySchema) -> Result<(), ValidationError> {
        let items = value.as_array().ok_or_else(|| {
            ValidationError::body(format!("expected a JSON array of {}", schema.entity))
        })?;
        for (i, item) in items.iter().enumerate() {
            Self::validate(item, schema).map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }
}

fn validate_field(obj: &Map<String, Value>, rule: &ValidationRule) -> Result<(), ValidationError> {
    let col = rule.field;
    let v = match obj.get(col) {
        None | Some(Value::Null) if rule.required => {
            return Err(ValidationError::new(col, format!("{} is required", col)));
        }
        None | Some(Value::Null) => return Ok(()),
        Some(v) => v,
    };
    match rule.kind {
        FieldKind::Text => {
            non_blank_str(col, v)?;
        }
        FieldKind::Url => {
            let s = non_blank_str(col, v)?;
            if !url_pattern().is_some_and(|re| re.is_match(s)) {
                return Err(ValidationError::new(col, format!("{} must be a valid URL", col)));
            }
        }
        FieldKind::Integer => {
            let n = v
                .as_i64()
                .filter(|n| i32::try_from(*n).is_ok())
                .ok_or_else(|| ValidationError::new(col, format!("{} must be an integer", col)))?;
            if let Some(min) = rule.minimum {
                if n < min {
                    return Err(ValidationError::new(
                        col,
                        format!("{} must be at least {}", col, min),
                    ));
                }
            }
        }
        FieldKind::Timestamp => {
            let s = v
                .as_str()
                .ok_or_else(|| ValidationError::new(col, format!("{} must be a timestamp", col)))?;
            if chrono::DateTime::parse_from_rfc3339(s).is_err() {
                return Err(ValidationError::new(
                    col,
                    format!("{} must be an RFC 3339 timestamp", col),
                ));
            }
        }
    }
    Ok(())
}

fn non_blank_str<'a>(col: &str, v: &'a Value) -> Result<&'a str, ValidationError> {
    let s = v
        .as_str()
        .ok_or_else(|| ValidationError::new(col, format!("{} must be a string", col)))?;
    if s.trim().is_empty() {
        return Err(ValidationError::new(col, format!("{} must not be empty", col)));
    }
    Ok(s)
}

const URL_PATTERN: &str = r"^(?i)https?://[^\s/?#@]+(?:[/?#]\S*)?$";

fn url_pattern() -> Option<&'static Regex> {
    static URL: OnceLock<Option<Regex>> = OnceLock::new();
    URL.get_or_init(|| Regex::new(URL_PATTERN).ok()).as_ref()
}

/// A wire type described by an [`EntitySchema`].
pub trait Validated: DeserializeOwned {
    const SCHEMA: EntitySchema;

    /// Check `value` against [`Self::SCHEMA`] and then deserialize it.
    fn from_json(value: Value) -> Result<Self, ValidationError> {
        RequestValidator::validate(&value, &Self::SCHEMA)?;
        serde_json::from_value(value).map_err(|e| ValidationError::body(e.to_string()))
    }

    fn list_from_json(value: Value) -> Result<Vec<Self>, ValidationError> {
        RequestValidator::validate_list(&value, &Self::SCHEMA)?;
        serde_json::from_value(value).map_err(|e| ValidationError::body(e.to_string()))
    }
}
