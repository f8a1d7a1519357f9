/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    common::{types::MessageCenterMessage, utils::format_date},
    tools::error::AppError,
};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

// Wire shape of a message center message on the plugin side of the bridge.
#[derive(Serialize)]
struct MessageDocument<'a> {
    #[serde(rename = "messageID")]
    message_id: &'a Option<String>,
    subject: &'a Option<String>,
    message: &'a Option<String>,
    #[serde(rename = "iconURL")]
    icon_url: &'a Option<String>,
    #[serde(rename = "messageCenterName")]
    message_center_name: &'a Option<String>,
    #[serde(rename = "deeplinkURL")]
    deeplink_url: &'a Option<String>,
    #[serde(rename = "richMessageHTML")]
    rich_message_html: &'a Option<String>,
    #[serde(rename = "richMessageURL")]
    rich_message_url: &'a Option<String>,
    #[serde(rename = "sentTimestamp")]
    sent_timestamp: Option<String>,
    #[serde(rename = "expiryTimestamp")]
    expiry_timestamp: Option<String>,
}

fn message_to_document(message: &MessageCenterMessage) -> Result<Value, AppError> {
    let document = MessageDocument {
        message_id: &message.message_id,
        subject: &message.subject,
        message: &message.message,
        icon_url: &message.icon_url,
        message_center_name: &message.message_center_name,
        deeplink_url: &message.deeplink_url,
        rich_message_html: &message.rich_message_html,
        rich_message_url: &message.rich_message_url,
        sent_timestamp: message.sent_timestamp.as_ref().map(format_date),
        expiry_timestamp: message.expiry_timestamp.as_ref().map(format_date),
    };
    Ok(serde_json::to_value(document)?)
}

/// Serializes message center messages best-effort: a failure is logged and
/// whatever was serialized before it is returned.
pub fn messages_to_document(messages: &[MessageCenterMessage]) -> Vec<Value> {
    let mut documents = Vec::with_capacity(messages.len());

    for message in messages {
        match message_to_document(message) {
            Ok(document) => documents.push(document),
            Err(err) => {
                error!("Failed to serialize message center message : {}", err);
                break;
            }
        }
    }

    documents
}
