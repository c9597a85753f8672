//! Notion API wire models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `POST /v1/pages` request body
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: ExpenseProperties,
}

/// Database the page is created in
#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub database_id: String,
}

impl Parent {
    #[must_use]
    pub fn database(database_id: impl Into<String>) -> Self {
        Self {
            kind: "database_id",
            database_id: database_id.into(),
        }
    }
}

/// The three columns of the expense database
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseProperties {
    pub title: TitleProperty,
    pub amount: NumberProperty,
    pub category: SelectProperty,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleProperty {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: Vec<RichText>,
}

impl TitleProperty {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: "title",
            title: vec![RichText {
                kind: "text",
                text: TextContent {
                    content: content.into(),
                },
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: TextContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}

/// Number column. Notion only accepts JSON numbers here, written from the
/// decimal digits without a round trip through `f64`.
#[derive(Debug, Clone, Serialize)]
pub struct NumberProperty {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub number: Decimal,
}

impl NumberProperty {
    #[must_use]
    pub const fn new(number: Decimal) -> Self {
        Self {
            kind: "number",
            number,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectProperty {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub select: SelectOption,
}

impl SelectProperty {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: "select",
            select: SelectOption { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub name: String,
}

/// Page returned by a successful create call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedPage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body returned by the Notion API
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_property_shape() {
        let value = serde_json::to_value(TitleProperty::new("Lunch")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "title",
                "title": [{ "type": "text", "text": { "content": "Lunch" } }]
            })
        );
    }

    #[test]
    fn number_property_is_json_number() {
        let json = serde_json::to_string(&NumberProperty::new(Decimal::new(4950, 2))).unwrap();
        assert_eq!(json, r#"{"type":"number","number":49.50}"#);
    }

    #[test]
    fn number_property_keeps_digits_beyond_f64() {
        let number: Decimal = "99999999999999999999999999.99".parse().unwrap();
        let json = serde_json::to_string(&NumberProperty::new(number)).unwrap();
        assert_eq!(json, r#"{"type":"number","number":99999999999999999999999999.99}"#);
    }

    #[test]
    fn select_property_shape() {
        let value = serde_json::to_value(SelectProperty::new("food")).unwrap();
        assert_eq!(value, json!({ "type": "select", "select": { "name": "food" } }));
    }

    #[test]
    fn parent_shape() {
        let value = serde_json::to_value(Parent::database("db-1")).unwrap();
        assert_eq!(value, json!({ "type": "database_id", "database_id": "db-1" }));
    }

    #[test]
    fn created_page_tolerates_missing_fields() {
        let page: CreatedPage = serde_json::from_value(json!({ "object": "page" })).unwrap();
        assert!(page.id.is_empty());
        assert!(page.url.is_none());
    }
}
