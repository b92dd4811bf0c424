//! Outcomes and read models of the capacity-guarded membership register

/// Outcome of an atomic join attempt.
///
/// `Full` and `NotFound` are ordinary outcomes, not errors: the register
/// reports what it observed under the lock and the boundary layer decides
/// how to present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The membership row was inserted
    Joined,
    /// Capacity was already reached when the lock was acquired
    Full,
    /// The event no longer exists
    NotFound,
}

impl JoinOutcome {
    /// Check if the join succeeded
    #[inline]
    pub fn is_joined(&self) -> bool {
        matches!(self, Self::Joined)
    }
}

/// Advisory read of an event's capacity and current membership.
///
/// Used to pre-render UI state; the authoritative check happens inside the
/// transactional join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacitySnapshot {
    pub capacity: i32,
    pub joined: i64,
}

impl CapacitySnapshot {
    /// Check if the event has reached capacity
    #[inline]
    pub fn is_full(&self) -> bool {
        self.joined >= i64::from(self.capacity)
    }

    /// Number of spots left (never negative)
    pub fn remaining(&self) -> i64 {
        (i64::from(self.capacity) - self.joined).max(0)
    }
}
