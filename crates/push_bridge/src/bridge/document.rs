/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::{common::utils::coerce_string, tools::error::AppError};
use rustc_hash::FxHashMap;
use serde_json::Value;

pub fn to_mapping(doc: &Value) -> Result<FxHashMap<String, Value>, AppError> {
    let object = doc.as_object().ok_or(AppError::DocumentNotAnObject)?;
    Ok(object
        .iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect())
}

pub fn to_sequence(doc: &Value) -> Result<Vec<Value>, AppError> {
    let sequence = doc.as_array().ok_or(AppError::DocumentNotAnArray)?;
    Ok(sequence.to_vec())
}

// Shallow coercion, unlike to_mapping: every top-level value becomes a
// flat string.
pub fn to_string_mapping(doc: &Value) -> Result<FxHashMap<String, String>, AppError> {
    let object = doc.as_object().ok_or(AppError::DocumentNotAnObject)?;
    Ok(object
        .iter()
        .map(|(key, value)| (key.to_owned(), coerce_string(value)))
        .collect())
}
