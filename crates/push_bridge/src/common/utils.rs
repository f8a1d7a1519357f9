/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use chrono::{DateTime, Local, Utc};
use serde_json::{Map, Value};

/// ISO-8601 with a numeric offset, e.g. `2023-05-01T10:15:30+00:00`.
pub const DATE_FORMAT_ISO8601: &str = "%Y-%m-%dT%H:%M:%S%:z";

// Nulls coerce to "", other scalars to their literal form, nested
// structures to JSON text.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_owned(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn opt_str(object: &Map<String, Value>, key: &str) -> String {
    object.get(key).map(coerce_string).unwrap_or_default()
}

pub fn opt_i64(object: &Map<String, Value>, key: &str) -> i64 {
    match object.get(key) {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(0),
        Some(Value::String(text)) => text.parse().unwrap_or(0),
        _ => 0,
    }
}

pub fn opt_f64(object: &Map<String, Value>, key: &str) -> f64 {
    match object.get(key) {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format(DATE_FORMAT_ISO8601)
        .to_string()
}
