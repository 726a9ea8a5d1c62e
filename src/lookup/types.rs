//! Lookup Data Types

use crate::dataset::types::{
    Record, FIELD_ADDRESS, FIELD_AREA_TOTAL, FIELD_BUILT_YEAR, FIELD_FOUNDATION_TYPE,
    FIELD_GAS_TYPE, FIELD_HEATING_TYPE, FIELD_HOT_WATER_TYPE, FIELD_HOUSEGUID,
    FIELD_WALL_MATERIAL,
};
use serde::{Deserialize, Serialize};

/// Shown in place of any value the registry leaves empty.
pub const NOT_SPECIFIED: &str = "Не указан";

/// Fields exposed by a lookup, with the value used when a record lacks one.
pub const FIELD_DEFAULTS: [(&str, &str); 9] = [
    (FIELD_ADDRESS, NOT_SPECIFIED),
    (FIELD_HOUSEGUID, NOT_SPECIFIED),
    (FIELD_BUILT_YEAR, NOT_SPECIFIED),
    (FIELD_AREA_TOTAL, NOT_SPECIFIED),
    (FIELD_FOUNDATION_TYPE, NOT_SPECIFIED),
    (FIELD_WALL_MATERIAL, NOT_SPECIFIED),
    (FIELD_HEATING_TYPE, NOT_SPECIFIED),
    (FIELD_HOT_WATER_TYPE, NOT_SPECIFIED),
    (FIELD_GAS_TYPE, NOT_SPECIFIED),
];

/// Detailed view of a single building, as returned by `/address/{houseguid}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressInfo {
    pub address: String,
    pub houseguid: String,
    pub built_year: String,
    pub area_total: String,
    pub foundation_type: String,
    pub wall_material: String,
    pub heating_type: String,
    pub hot_water_type: String,
    pub gas_type: String,
}

impl AddressInfo {
    /// Projects `record`, substituting defaults from [`FIELD_DEFAULTS`].
    pub fn from_record(record: &Record) -> Self {
        let [
            address,
            houseguid,
            built_year,
            area_total,
            foundation_type,
            wall_material,
            heating_type,
            hot_water_type,
            gas_type,
        ] = FIELD_DEFAULTS.map(|(name, default)| record.get(name).unwrap_or(default).to_string());

        Self {
            address,
            houseguid,
            built_year,
            area_total,
            foundation_type,
            wall_material,
            heating_type,
            hot_water_type,
            gas_type,
        }
    }
}
