/// Decimal rendering for marker offsets. Integral offsets keep a trailing
/// `.0` (`2.0`, `0.0`) so the emitted line matches what Reaper writes for
/// its own markers; everything else uses the shortest exact form.
#[must_use]
pub fn format_offset_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 && seconds.is_finite() {
        format!("{seconds:.1}")
    } else {
        format!("{seconds}")
    }
}

#[must_use]
pub fn beats_to_seconds(beats: f64, bpm: f64) -> f64 {
    if bpm <= 0.0 {
        return 0.0;
    }

    beats * (60.0 / bpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_offsets_keep_trailing_zero() {
        assert_eq!(format_offset_seconds(0.0), "0.0");
        assert_eq!(format_offset_seconds(2.0), "2.0");
        assert_eq!(format_offset_seconds(120.0), "120.0");
    }

    #[test]
    fn fractional_offsets_render_exactly() {
        assert_eq!(format_offset_seconds(2.5), "2.5");
        assert_eq!(format_offset_seconds(0.125), "0.125");
    }

    #[test]
    fn beats_convert_at_tempo() {
        let seconds = beats_to_seconds(4.0, 120.0);
        assert!((seconds - 2.0).abs() < f64::EPSILON);
        assert!((beats_to_seconds(4.0, 0.0)).abs() < f64::EPSILON);
    }
}
