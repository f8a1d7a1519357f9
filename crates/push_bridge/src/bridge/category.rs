/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::common::{
    types::{NotificationButton, NotificationCategory},
    utils::opt_str,
};
use serde_json::{json, Value};

pub fn category_to_document(category: &NotificationCategory) -> Value {
    let buttons = category
        .buttons
        .iter()
        .map(|button| {
            json!({
                "id": button.id,
                "action": button.action,
                "label": button.label,
            })
        })
        .collect::<Vec<Value>>();

    json!({
        "orcl_category": category.category,
        "orcl_btns": buttons,
    })
}

/// An empty category label or a missing `orcl_btns` key fails the
/// conversion; an empty button array is valid. Button entries that are
/// not objects are skipped.
pub fn category_from_sequence(doc: &Value) -> Option<NotificationCategory> {
    let object = doc.as_array()?.first()?.as_object()?;

    let category = opt_str(object, "orcl_category");
    let button_array = object.get("orcl_btns")?.as_array()?;
    if category.is_empty() {
        return None;
    }

    let buttons = button_array
        .iter()
        .filter_map(Value::as_object)
        .map(|button| NotificationButton {
            id: opt_str(button, "id"),
            action: opt_str(button, "action"),
            label: opt_str(button, "label"),
        })
        .collect();

    Some(NotificationCategory { category, buttons })
}
