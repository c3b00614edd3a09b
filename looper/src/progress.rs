/// Number of segments in the loop progress bar.
pub const PROGRESS_SEGMENTS: usize = 8;

/// Cumulative progress bar for `loop_index` in a loop of `length` slots.
///
/// Segment `k` lights once the index passes `(length / PROGRESS_SEGMENTS) * (k - 1)`,
/// so index 0 already shows the first segment.
pub fn progress_mask(loop_index: usize, length: usize) -> u8 {
    let segment = length / PROGRESS_SEGMENTS;

    (1..=PROGRESS_SEGMENTS)
        .find(|&k| loop_index <= segment * k)
        .map_or(u8::MAX, |k| ((1u16 << k) - 1) as u8)
}

/// Next loop position, wrapping to 0 after the last slot.
pub fn next_index(loop_index: usize, length: usize) -> usize {
    if loop_index + 1 < length {
        loop_index + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_thresholds_for_a_400_slot_loop() {
        assert_eq!(progress_mask(0, 400), 0x01);
        assert_eq!(progress_mask(50, 400), 0x01);
        assert_eq!(progress_mask(51, 400), 0x03);
        assert_eq!(progress_mask(200, 400), 0x0F);
        assert_eq!(progress_mask(201, 400), 0x1F);
        assert_eq!(progress_mask(351, 400), 0xFF);
        assert_eq!(progress_mask(399, 400), 0xFF);
    }

    #[test]
    fn indices_past_the_last_threshold_show_every_segment() {
        // 10 / 8 leaves a one-slot segment, so thresholds stop at 8
        assert_eq!(progress_mask(8, 10), 0xFF);
        assert_eq!(progress_mask(9, 10), 0xFF);
    }

    #[test]
    fn next_index_wraps_at_length() {
        assert_eq!(next_index(0, 400), 1);
        assert_eq!(next_index(398, 400), 399);
        assert_eq!(next_index(399, 400), 0);
    }
}
