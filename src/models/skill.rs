//! Request and response shapes of the chatbot skill webhook.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const SKILL_RESPONSE_VERSION: &str = "2.0";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    #[serde(default)]
    pub user_request: Option<UserRequest>,
    #[serde(default)]
    pub action: Option<SkillAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub utterance: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillAction {
    #[serde(default)]
    pub params: Option<ReservationParams>,
}

/// Slots filled by the chatbot platform. Every key is optional and any
/// JSON value is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationParams {
    #[serde(default, deserialize_with = "lenient_slot")]
    pub people_count: Option<String>,
    #[serde(default, deserialize_with = "lenient_slot")]
    pub preferred_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_slot")]
    pub preferred_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_slot")]
    pub contact_number: Option<String>,
}

/// Renders a slot value as text. `null`, `false`, `0` and `""` count as
/// not filled.
fn lenient_slot<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

impl SkillPayload {
    pub fn utterance(&self) -> Option<&str> {
        self.user_request
            .as_ref()
            .and_then(|r| r.utterance.as_deref())
    }

    pub fn params(&self) -> Option<&ReservationParams> {
        self.action.as_ref().and_then(|a| a.params.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillResponse {
    pub version: String,
    pub template: SkillTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillTemplate {
    pub outputs: Vec<SkillOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillOutput {
    #[serde(rename = "simpleText")]
    pub simple_text: SimpleText,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpleText {
    pub text: String,
}

impl SkillResponse {
    pub fn simple_text(text: impl Into<String>) -> Self {
        Self {
            version: SKILL_RESPONSE_VERSION.to_string(),
            template: SkillTemplate {
                outputs: vec![SkillOutput {
                    simple_text: SimpleText { text: text.into() },
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let body = r#"{
            "intent": {"id": "abc", "name": "reservation"},
            "userRequest": {"utterance": "예약할게요", "lang": "ko"},
            "action": {
                "name": "reserve",
                "params": {
                    "people_count": "10",
                    "preferred_date": "2025-01-01",
                    "preferred_time": "14:00",
                    "contact_number": "010-1111-2222"
                }
            }
        }"#;

        let payload: SkillPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.utterance(), Some("예약할게요"));
        let params = payload.params().unwrap();
        assert_eq!(params.people_count.as_deref(), Some("10"));
        assert_eq!(params.contact_number.as_deref(), Some("010-1111-2222"));
    }

    #[test]
    fn test_parse_without_action() {
        let body = r#"{"userRequest": {"utterance": "010-3333-4444"}}"#;
        let payload: SkillPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.utterance(), Some("010-3333-4444"));
        assert!(payload.params().is_none());
    }

    #[test]
    fn test_non_string_slots_are_rendered() {
        let body = r#"{"action": {"params": {
            "people_count": 10,
            "preferred_date": true,
            "preferred_time": 14.5,
            "contact_number": null
        }}}"#;

        let payload: SkillPayload = serde_json::from_str(body).unwrap();
        let params = payload.params().unwrap();
        assert_eq!(params.people_count.as_deref(), Some("10"));
        assert_eq!(params.preferred_date.as_deref(), Some("true"));
        assert_eq!(params.preferred_time.as_deref(), Some("14.5"));
        assert_eq!(params.contact_number, None);
    }

    #[test]
    fn test_falsy_slots_are_absent() {
        let body = r#"{"action": {"params": {
            "people_count": 0,
            "preferred_date": false,
            "preferred_time": ""
        }}}"#;

        let payload: SkillPayload = serde_json::from_str(body).unwrap();
        let params = payload.params().unwrap();
        assert_eq!(params.people_count, None);
        assert_eq!(params.preferred_date, None);
        assert_eq!(params.preferred_time, None);
        assert_eq!(params.contact_number, None);
    }

    #[test]
    fn test_simple_text_shape() {
        let json = serde_json::to_value(SkillResponse::simple_text("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "2.0",
                "template": {"outputs": [{"simpleText": {"text": "hi"}}]}
            })
        );
    }
}
