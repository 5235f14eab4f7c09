//! Users and their avatar photos.

use backlog_sift::{AsValue, Fields, Value};
use serde::{Deserialize, Serialize};

use super::{record_value, ApiResource, ResourceRef};

/// Avatar renditions keyed by pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub image_21x21: String,
    pub image_27x27: String,
    pub image_36x36: String,
    pub image_60x60: String,
    pub image_128x128: String,
}

impl Fields for Photo {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "image_21x21" => Some(self.image_21x21.as_value()),
            "image_27x27" => Some(self.image_27x27.as_value()),
            "image_36x36" => Some(self.image_36x36.as_value()),
            "image_60x60" => Some(self.image_60x60.as_value()),
            "image_128x128" => Some(self.image_128x128.as_value()),
            _ => None,
        }
    }
}

/// A user account.
///
/// The `photo` key is always present in payloads but its value is null
/// for accounts without an avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub gid: String,
    pub email: String,
    pub name: String,
    pub photo: Option<Photo>,
    pub resource_type: String,
    pub workspaces: Vec<ResourceRef>,
}

impl ApiResource for User {
    const NAME: &'static str = "user";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "email",
        "name",
        "photo",
        "resource_type",
        "workspaces",
    ];
}

impl Fields for User {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "email" => Some(self.email.as_value()),
            "name" => Some(self.name.as_value()),
            "photo" => Some(record_value(&self.photo)),
            "resource_type" => Some(self.resource_type.as_value()),
            _ => None,
        }
    }
}
