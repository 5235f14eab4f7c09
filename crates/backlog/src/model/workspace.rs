//! Workspaces, the top-level containers every other record lives in.

use backlog_sift::{AsValue, Fields, Value};
use serde::{Deserialize, Serialize};

use super::ApiResource;

/// A workspace or organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub gid: String,
    pub email_domains: Vec<String>,
    pub is_organization: bool,
    pub name: String,
    pub resource_type: String,
}

impl ApiResource for Workspace {
    const NAME: &'static str = "workspace";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "email_domains",
        "is_organization",
        "name",
        "resource_type",
    ];
}

impl Fields for Workspace {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "is_organization" => Some(self.is_organization.as_value()),
            "name" => Some(self.name.as_value()),
            "resource_type" => Some(self.resource_type.as_value()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "id": 4004,
            "gid": "4004",
            "email_domains": ["example.com"],
            "is_organization": true,
            "name": "Example Inc",
            "resource_type": "workspace",
        })
    }

    #[test]
    fn decodes_from_payload() {
        let workspace = Workspace::from_json(payload()).unwrap();
        assert_eq!(workspace.name, "Example Inc");
        assert_eq!(workspace.email_domains, vec!["example.com".to_string()]);
        assert!(workspace.is_organization);
    }

    #[test]
    fn missing_keys_are_all_reported() {
        let err = Workspace::from_json(json!({"id": 1, "gid": "1"})).unwrap_err();
        let message = err.to_string();
        for key in ["email_domains", "is_organization", "name", "resource_type"] {
            assert!(message.contains(key), "missing {key} in {message}");
        }
    }

    #[test]
    fn fields_expose_scalars_but_not_lists() {
        let workspace = Workspace::from_json(payload()).unwrap();
        assert_eq!(workspace.field("is_organization"), Some(Value::Bool(true)));
        assert_eq!(workspace.field("email_domains"), None);
    }
}
