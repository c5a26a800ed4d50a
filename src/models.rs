//! Typed models for Socie API collections
//!
//! These started life as output of [`crate::schema::generate_struct`] over
//! sampled `modules` and `memberships` collections, then got tidied renames
//! for keyword and underscore fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community module (feature tile) as returned by `/modules`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub community_id: String,
    pub icon: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub groups: String,
    #[serde(rename = "type")]
    pub module_type: String,
    #[serde(rename = "isEnabled")]
    pub is_enabled: bool,
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
    #[serde(rename = "iconFa")]
    pub icon_fa: String,
    #[serde(rename = "orderNumber")]
    pub order_number: i64,
    #[serde(rename = "primaryGroupsWidgetEnabled", default)]
    pub primary_groups_widget_enabled: Option<bool>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(rename = "isGuestAllowed", default)]
    pub is_guest_allowed: Option<bool>,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub payment: Option<String>,
    #[serde(default)]
    pub widgets: Option<String>,
    #[serde(default)]
    pub external: Option<String>,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(rename = "primaryItems", default)]
    pub primary_items: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// A community membership as returned by `/memberships`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub preferences: String,
    #[serde(rename = "extraFields")]
    pub extra_fields: String,
    pub created: DateTime<Utc>,
    pub feed_id: String,
    pub person: String,
    pub community_id: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub roles: String,
    pub address: String,
    pub status: String,
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub privacy: Option<String>,
}
