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
        types::{BeaconRegion, GeoRegion, RegionEventType},
        utils::{opt_f64, opt_i64, opt_str},
    },
};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

/// Builds a geofence region from the first element of a region sequence;
/// call sites hand over single-region sequences, so further elements are
/// not consulted. `None` when the geofence identity is missing or empty.
pub fn geo_region_from_sequence(doc: &Value, event_type: RegionEventType) -> Option<GeoRegion> {
    let region = doc.as_array()?.first()?.as_object()?;

    let geofence_id = opt_str(region, "geofenceId");
    let geofence_name = opt_str(region, "geofenceName");
    if geofence_id.is_empty() || geofence_name.is_empty() {
        return None;
    }

    Some(GeoRegion {
        geofence_id,
        geofence_name,
        event_type,
        zone_name: opt_str(region, "zoneName"),
        zone_id: opt_str(region, "zoneId"),
        source: opt_str(region, "source"),
        device_bearing: opt_f64(region, "deviceBearing"),
        device_speed: opt_f64(region, "deviceSpeed"),
        dwell_time: opt_i64(region, "dwellTime"),
        extra: extra_params(region),
    })
}

pub fn beacon_region_from_sequence(
    doc: &Value,
    event_type: RegionEventType,
) -> Option<BeaconRegion> {
    let region = doc.as_array()?.first()?.as_object()?;

    let beacon_id = opt_str(region, "beaconId");
    let beacon_name = opt_str(region, "beaconName");
    if beacon_id.is_empty() || beacon_name.is_empty() {
        return None;
    }

    Some(BeaconRegion {
        beacon_id,
        beacon_name,
        event_type,
        beacon_tag: opt_str(region, "beaconTag"),
        beacon_proximity: opt_str(region, "beaconProximity"),
        ibeacon_uuid: opt_str(region, "iBeaconUUID"),
        ibeacon_major: opt_i64(region, "iBeaconMajor"),
        ibeacon_minor: opt_i64(region, "iBeaconMinor"),
        eddystone_id1: opt_str(region, "eddyStoneId1"),
        eddystone_id2: opt_str(region, "eddyStoneId2"),
        zone_name: opt_str(region, "zoneName"),
        zone_id: opt_str(region, "zoneId"),
        source: opt_str(region, "source"),
        dwell_time: opt_i64(region, "dwellTime"),
        extra: extra_params(region),
    })
}

// An absent or non-object "extra" leaves the field unset rather than
// attaching an empty mapping.
fn extra_params(region: &Map<String, Value>) -> Option<FxHashMap<String, String>> {
    region
        .get("extra")
        .and_then(|extra| to_string_mapping(extra).ok())
}
