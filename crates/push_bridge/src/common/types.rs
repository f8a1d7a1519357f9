/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Source tag stamped on every remote message handed to the SDK.
pub const REMOTE_MESSAGE_SOURCE: &str = "rsys_internal";

#[derive(
    Debug, Clone, Copy, EnumString, EnumIter, Display, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
pub enum RegionEventType {
    Entry,
    Exit,
    Dwell,
}

/// Geofence region descriptor handed to the SDK on entry/exit events.
/// `extra` stays `None` when the source document carried no extra object;
/// "no extra data" and "empty extra data" are distinct.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GeoRegion {
    pub geofence_id: String,
    pub geofence_name: String,
    pub zone_name: String,
    pub zone_id: String,
    pub source: String,
    pub device_bearing: f64,
    pub device_speed: f64,
    pub dwell_time: i64,
    pub event_type: RegionEventType,
    pub extra: Option<FxHashMap<String, String>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BeaconRegion {
    pub beacon_id: String,
    pub beacon_name: String,
    pub beacon_tag: String,
    pub beacon_proximity: String,
    pub ibeacon_uuid: String,
    pub ibeacon_major: i64,
    pub ibeacon_minor: i64,
    pub eddystone_id1: String,
    pub eddystone_id2: String,
    pub zone_name: String,
    pub zone_id: String,
    pub source: String,
    pub dwell_time: i64,
    pub event_type: RegionEventType,
    pub extra: Option<FxHashMap<String, String>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct NotificationButton {
    pub id: String,
    pub action: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct NotificationCategory {
    pub category: String,
    pub buttons: Vec<NotificationButton>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct MessageCenterMessage {
    pub message_id: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub icon_url: Option<String>,
    pub message_center_name: Option<String>,
    pub deeplink_url: Option<String>,
    pub rich_message_html: Option<String>,
    pub rich_message_url: Option<String>,
    pub sent_timestamp: Option<DateTime<Utc>>,
    pub expiry_timestamp: Option<DateTime<Utc>>,
}

/// Field-by-field configuration for a remote message, filled in while
/// parsing the source document and then handed to [`RemoteMessage::new`].
#[derive(Debug, Clone, Default)]
pub struct RemoteMessageConfig {
    pub ttl: Option<i32>,
    pub message_id: Option<String>,
    pub message_type: Option<String>,
    pub collapse_key: Option<String>,
    pub data: FxHashMap<String, String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RemoteMessage {
    pub source: String,
    pub ttl: Option<i32>,
    pub message_id: Option<String>,
    pub message_type: Option<String>,
    pub collapse_key: Option<String>,
    pub data: FxHashMap<String, String>,
}

impl RemoteMessage {
    pub fn new(config: RemoteMessageConfig) -> Self {
        RemoteMessage {
            source: REMOTE_MESSAGE_SOURCE.to_string(),
            ttl: config.ttl,
            message_id: config.message_id,
            message_type: config.message_type,
            collapse_key: config.collapse_key,
            data: config.data,
        }
    }
}

#[derive(Debug, Clone, Display, PartialEq)]
pub enum PreferenceValue {
    #[strum(serialize = "STRING")]
    Text(String),
    #[strum(serialize = "NUMBER")]
    Number(f64),
    #[strum(serialize = "BOOLEAN")]
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub key: String,
    pub label: String,
    pub value: PreferenceValue,
}
