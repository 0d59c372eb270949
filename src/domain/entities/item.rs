//! Item entity - A catalog record pushed to the remote item group

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Prefix shared by every synthesized external id
const EXTERNAL_ID_PREFIX: &str = "EXTERNAL_";
/// Offset added to the 1-based index when building external ids
const EXTERNAL_ID_OFFSET: u32 = 12345;

/// A catalog item as accepted by the `sync_update` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub label: String,
    pub label_color: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub custom_fields: BTreeMap<String, String>,
    pub button_label: String,
    pub position: u32,
}

/// Shared fields every generated item starts from
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    /// Title stem; the item index is appended
    pub title: String,
    /// Description stem; the item index is appended
    pub description: String,
    pub label: String,
    pub label_color: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub custom_fields: BTreeMap<String, String>,
    pub button_label: String,
    pub position: u32,
}

impl ItemTemplate {
    /// The sample listing used for catalog synchronization runs
    pub fn sample() -> Self {
        let custom_fields = [
            ("price", "5,000万円"),
            ("address", "東京都千代田区千代田1-1-1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            title: "サンプル物件".to_string(),
            description: "これは説明文です。".to_string(),
            label: "分譲住宅 | 東京駅".to_string(),
            label_color: "#E67050".to_string(),
            image_url: "https://th.bing.com/th/id/OIG1.54KCbwld1CFqClrd_Rb0?pid=ImgGn".to_string(),
            tags: vec!["xxx小学校".to_string(), "東京駅".to_string()],
            created_at: utc_midnight(2024, 1, 1),
            updated_at: utc_midnight(2024, 1, 2),
            url: "http://auka.jp/".to_string(),
            custom_fields,
            button_label: "詳細を見る".to_string(),
            position: 1,
        }
    }

    /// Stamp out the item at a 1-based index
    pub fn item_for(&self, index: u32) -> Item {
        Item {
            external_id: external_id_for(index),
            title: format!("{}{}", self.title, index),
            description: format!("{}{}", self.description, index),
            label: self.label.clone(),
            label_color: self.label_color.clone(),
            image_url: self.image_url.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            url: self.url.clone(),
            custom_fields: self.custom_fields.clone(),
            button_label: self.button_label.clone(),
            position: self.position,
        }
    }
}

impl Default for ItemTemplate {
    fn default() -> Self {
        Self::sample()
    }
}

/// External id for a 1-based item index
fn external_id_for(index: u32) -> String {
    format!(
        "{}{}",
        EXTERNAL_ID_PREFIX,
        u64::from(EXTERNAL_ID_OFFSET) + u64::from(index)
    )
}

fn utc_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
