/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::common::types::{Preference, PreferenceValue};
use serde_json::{json, Value};

pub fn preferences_to_document(preferences: &[Preference]) -> Value {
    Value::Array(preferences.iter().map(preference_to_document).collect())
}

fn preference_to_document(preference: &Preference) -> Value {
    let value = match &preference.value {
        PreferenceValue::Text(text) => json!(text),
        PreferenceValue::Number(number) => json!(number),
        PreferenceValue::Boolean(flag) => json!(flag),
    };

    json!({
        "key": preference.key,
        "label": preference.label,
        "value": value,
        "type": preference.value.to_string(),
    })
}

pub fn string_sequence_to_document(items: &[String]) -> Value {
    json!(items)
}
