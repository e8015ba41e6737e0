use crate::types::DeviceRecord;
use tracing::debug;

/// Records ready for the table plus the number of `TODO` placeholders that
/// were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub documented: Vec<DeviceRecord>,
    pub placeholders: usize,
}

/// Split loaded records into documented entries (in their original order)
/// and a count of placeholders.
pub fn partition(records: impl IntoIterator<Item = DeviceRecord>) -> Catalog {
    let mut catalog = Catalog::default();
    for rec in records {
        if rec.is_placeholder() {
            catalog.placeholders += 1;
        } else {
            catalog.documented.push(rec);
        }
    }
    debug!(
        documented = catalog.documented.len(),
        placeholders = catalog.placeholders,
        "partitioned device records"
    );
    catalog
}
