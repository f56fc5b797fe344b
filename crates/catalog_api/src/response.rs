//! Types for responses from the backend to the frontend.

pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

/// Wrapper around every catalog response.
///
/// Some endpoints answer with `ok` instead of `success`, both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(alias = "ok")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reads the success flag of a bare JSON body, if it carries one.
pub fn success_flag(body: &Value) -> Option<bool> {
    let object = body.as_object()?;
    object
        .get("success")
        .or_else(|| object.get("ok"))
        .and_then(Value::as_bool)
}

/// Body of the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "adminId", deserialize_with = "string_or_number")]
    pub admin_id: String,
}

/// Body of the sign-in endpoint.
///
/// The backend either hands out a token right away or answers with a
/// challenge message for the given email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand_name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub category_name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand_id: String,
    pub model_name: String,
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand_id: String,
    pub model_id: String,
    pub category_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(id) => id,
        StringOrNumber::Number(id) => id.to_string(),
    };
    Ok(id)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_accepts_ok_alias() {
        let envelope: Envelope = serde_json::from_value(json!({ "ok": true, "data": [1, 2] })).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(json!([1, 2])));
    }

    #[test]
    fn envelope_without_data() {
        let envelope: Envelope =
            serde_json::from_value(json!({ "success": false, "message": "Duplicate brand" }))
                .unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message.as_deref(), Some("Duplicate brand"));
    }

    #[test]
    fn reads_success_flag() {
        assert_eq!(success_flag(&json!({ "success": false })), Some(false));
        assert_eq!(success_flag(&json!({ "ok": true })), Some(true));
        assert_eq!(success_flag(&json!({ "adminId": "a1" })), None);
        assert_eq!(success_flag(&json!([1, 2, 3])), None);
    }

    #[test]
    fn profile_id_can_be_numeric() {
        let profile: Profile = serde_json::from_value(json!({ "adminId": 42 })).unwrap();
        assert_eq!(profile.admin_id, "42");

        let profile: Profile = serde_json::from_value(json!({ "adminId": "65f0c1" })).unwrap();
        assert_eq!(profile.admin_id, "65f0c1");
    }

    #[test]
    fn decodes_category_record() {
        let category: Category = serde_json::from_value(json!({
            "_id": "c1",
            "category_name": "Phones",
            "image": "data:image/png;base64,AAAA",
            "createdAt": "2024-03-01T10:00:00Z",
            "__v": 0,
        }))
        .unwrap();
        assert_eq!(category.id, "c1");
        assert_eq!(category.category_name, "Phones");
        assert!(category.created_at.is_some());
    }
}
