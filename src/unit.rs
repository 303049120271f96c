//! Unit conversion utilities.
//!
//! WordprocessingML measures lengths in a handful of units: twips
//! (twentieths of a point) for paragraph spacing and table widths,
//! half-points for font sizes, and EMUs (English Metric Units) for
//! drawing extents.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_TWIP: i64 = 635;
pub const TWIPS_PER_PT: i64 = 20;

/// EMUs per pixel at the conventional 96 dpi screen resolution.
pub const EMUS_PER_PX_96DPI: i64 = 9_525;

/// Convert a font size in points to half-points (the `w:sz` unit).
///
/// Truncates toward zero, so 10.5pt becomes 21 and 10.4pt becomes 20.
#[inline]
pub fn pt_to_half_points(pt: f64) -> i64 {
    (pt * 2.0) as i64
}

#[inline]
pub fn pt_to_twips(pt: f64) -> i64 {
    (pt * TWIPS_PER_PT as f64) as i64
}

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Convert a pixel dimension to EMUs at the given resolution.
#[inline]
pub fn px_to_emu(px: u32, dpi: u32) -> i64 {
    ((px as f64) * EMUS_PER_INCH as f64 / dpi as f64) as i64
}

/// Convert a pixel dimension to EMUs at 96 dpi (one pixel = 9525 EMUs).
#[inline]
pub fn px_to_emu_96(px: u32) -> i64 {
    px as i64 * EMUS_PER_PX_96DPI
}

#[inline]
pub fn twip_to_emu(twips: i64) -> i64 {
    twips.saturating_mul(EMUS_PER_TWIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_to_half_points() {
        assert_eq!(pt_to_half_points(10.5), 21);
        assert_eq!(pt_to_half_points(9.0), 18);
        assert_eq!(pt_to_half_points(12.0), 24);
        // Truncation, not rounding
        assert_eq!(pt_to_half_points(10.4), 20);
        assert_eq!(pt_to_half_points(10.9), 21);
    }

    #[test]
    fn test_px_to_emu() {
        assert_eq!(px_to_emu_96(1), 9_525);
        assert_eq!(px_to_emu_96(96), EMUS_PER_INCH);
        assert_eq!(px_to_emu(96, 96), EMUS_PER_INCH);
        assert_eq!(px_to_emu(300, 300), EMUS_PER_INCH);
    }

    #[test]
    fn test_pt_to_twips() {
        assert_eq!(pt_to_twips(1.0), 20);
        assert_eq!(pt_to_twips(10.5), 210);
    }

    #[test]
    fn test_twip_to_emu() {
        assert_eq!(twip_to_emu(1), 635);
        assert_eq!(twip_to_emu(20), EMUS_PER_PT);
        assert_eq!(twip_to_emu(1440), EMUS_PER_INCH);
    }
}
