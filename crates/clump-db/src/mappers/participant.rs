//! Participant read-model mapper

use clump_core::entities::CapacitySnapshot;

use crate::models::CapacityRow;

impl From<CapacityRow> for CapacitySnapshot {
    fn from(row: CapacityRow) -> Self {
        CapacitySnapshot {
            capacity: row.capacity,
            joined: row.joined,
        }
    }
}
