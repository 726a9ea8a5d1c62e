//! Dataset Data Types
//!
//! Typed representation of one row of the registry export and of the full
//! immutable dataset built from it.

use std::collections::BTreeMap;

/// Column names the service reads. Every other column is kept in
/// [`Record::other`] untouched.
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_HOUSEGUID: &str = "houseguid";
pub const FIELD_BUILT_YEAR: &str = "built_year";
pub const FIELD_AREA_TOTAL: &str = "area_total";
pub const FIELD_FOUNDATION_TYPE: &str = "foundation_type";
pub const FIELD_WALL_MATERIAL: &str = "wall_material";
pub const FIELD_HEATING_TYPE: &str = "heating_type";
pub const FIELD_HOT_WATER_TYPE: &str = "hot_water_type";
pub const FIELD_GAS_TYPE: &str = "gas_type";

/// One parsed row of the registry export.
///
/// Blank and whitespace-only cells are stored as `None`, so callers only ever
/// have to check for absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub address: Option<String>,
    /// FIAS code of the building.
    pub houseguid: Option<String>,
    pub built_year: Option<String>,
    pub area_total: Option<String>,
    pub foundation_type: Option<String>,
    pub wall_material: Option<String>,
    pub heating_type: Option<String>,
    pub hot_water_type: Option<String>,
    pub gas_type: Option<String>,
    /// Remaining columns of the export, keyed by header name.
    pub other: BTreeMap<String, Option<String>>,
}

impl Record {
    /// Stores `value` under the column `name`, normalizing blanks to `None`.
    pub fn set(&mut self, name: &str, value: Option<&str>) {
        let value = normalize(value);
        match name {
            FIELD_ADDRESS => self.address = value,
            FIELD_HOUSEGUID => self.houseguid = value,
            FIELD_BUILT_YEAR => self.built_year = value,
            FIELD_AREA_TOTAL => self.area_total = value,
            FIELD_FOUNDATION_TYPE => self.foundation_type = value,
            FIELD_WALL_MATERIAL => self.wall_material = value,
            FIELD_HEATING_TYPE => self.heating_type = value,
            FIELD_HOT_WATER_TYPE => self.hot_water_type = value,
            FIELD_GAS_TYPE => self.gas_type = value,
            _ => {
                self.other.insert(name.to_string(), value);
            }
        }
    }

    /// Looks a column up by its header name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            FIELD_ADDRESS => &self.address,
            FIELD_HOUSEGUID => &self.houseguid,
            FIELD_BUILT_YEAR => &self.built_year,
            FIELD_AREA_TOTAL => &self.area_total,
            FIELD_FOUNDATION_TYPE => &self.foundation_type,
            FIELD_WALL_MATERIAL => &self.wall_material,
            FIELD_HEATING_TYPE => &self.heating_type,
            FIELD_HOT_WATER_TYPE => &self.hot_water_type,
            FIELD_GAS_TYPE => &self.gas_type,
            _ => return self.other.get(name).and_then(|v| v.as_deref()),
        };
        value.as_deref()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

/// The full, ordered set of records loaded from the export.
///
/// Built once and never mutated afterwards. Records keep file order, which
/// search tie-breaking and first-match lookup both rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
