/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{
    bridge::document::to_string_mapping,
    common::{
        types::{RemoteMessage, RemoteMessageConfig},
        utils::{opt_i64, opt_str},
    },
    tools::error::AppError,
};
use serde_json::Value;

const FBM_KEY_COLLAPSE_KEY: &str = "collapseKey";
const FBM_KEY_DATA: &str = "data";
const FBM_KEY_MESSAGE_ID: &str = "google.message_id";
const FBM_KEY_MESSAGE_TYPE: &str = "messageType";
const FBM_KEY_TTL: &str = "ttl";

/// Parses a remote message from one of two mutually exclusive document
/// shapes. A `data` key selects the nested shape, where payload entries
/// live under it and metadata sits at the top level. Without a `data` key
/// the whole document is the payload and metadata is never read.
pub fn remote_message_from_document(doc: &Value) -> Result<RemoteMessage, AppError> {
    let object = doc.as_object().ok_or(AppError::DocumentNotAnObject)?;
    let mut config = RemoteMessageConfig::default();

    match object.get(FBM_KEY_DATA) {
        Some(data) => {
            if object.contains_key(FBM_KEY_TTL) {
                // Out-of-range ttl degrades to 0 like any other malformed
                // numeric field.
                config.ttl = Some(i32::try_from(opt_i64(object, FBM_KEY_TTL)).unwrap_or_default());
            }
            if object.contains_key(FBM_KEY_MESSAGE_ID) {
                config.message_id = Some(opt_str(object, FBM_KEY_MESSAGE_ID));
            }
            if object.contains_key(FBM_KEY_MESSAGE_TYPE) {
                config.message_type = Some(opt_str(object, FBM_KEY_MESSAGE_TYPE));
            }
            if object.contains_key(FBM_KEY_COLLAPSE_KEY) {
                config.collapse_key = Some(opt_str(object, FBM_KEY_COLLAPSE_KEY));
            }
            config.data = to_string_mapping(data).unwrap_or_default();
        }
        None => {
            config.data = to_string_mapping(doc)?;
        }
    }

    Ok(RemoteMessage::new(config))
}
