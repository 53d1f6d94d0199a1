//! `Silent` leaf cost.

use align_core::TraceSlice;

/// Cost to align `slice` against a leaf accepting only the empty trace: every event must be
/// deleted.
pub fn align(slice: TraceSlice<'_>) -> u64 {
    slice.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::ActivityId;

    #[test]
    fn cost_equals_slice_length() {
        let events = [ActivityId::from_raw(0), ActivityId::from_raw(1)];
        assert_eq!(align(TraceSlice::from_raw(&events)), 2);
        assert_eq!(align(TraceSlice::empty()), 0);
    }
}
