use super::types::AddressInfo;
use crate::dataset::Dataset;

/// Finds the first record whose houseguid equals `houseguid` exactly.
///
/// Duplicate houseguids resolve to the earliest row in the export.
pub fn get_info(dataset: &Dataset, houseguid: &str) -> Option<AddressInfo> {
    dataset
        .iter()
        .find(|record| record.houseguid.as_deref() == Some(houseguid))
        .map(AddressInfo::from_record)
}
