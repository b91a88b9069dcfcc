//! Decimal-degree and degrees/minutes/seconds conversion.
//!
//! Splitting works in whole arc-seconds: the value is scaled by 3600 and
//! truncated toward zero, degrees come from a truncating division, and minutes
//! and seconds from the absolute remainder. Displayed values are therefore
//! always truncated, never rounded.
//!
//! The hemisphere letter follows the sign of the degree component. When the
//! degree component is zero (for example -0.3°) the sign of the original value
//! decides instead, so the hemisphere is never lost.

use std::fmt;

use crate::error::{Error, Result};

/// A cardinal direction letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Returns the single-letter abbreviation.
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        }
    }

    fn from_parts(degrees: i64, value: f64, is_latitude: bool) -> Self {
        let negative = match degrees.signum() {
            0 => value < 0.0,
            sign => sign < 0,
        };
        match (is_latitude, negative) {
            (true, false) => Hemisphere::North,
            (true, true) => Hemisphere::South,
            (false, false) => Hemisphere::East,
            (false, true) => Hemisphere::West,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// An angle split into whole degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegMinSec {
    /// Signed whole degrees (truncated toward zero).
    pub degrees: i64,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: Hemisphere,
}

impl DegMinSec {
    /// Convert back to signed decimal degrees.
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        deg_min_sec_to_decimal(
            self.degrees.unsigned_abs() as f64,
            f64::from(self.minutes),
            f64::from(self.seconds),
            self.hemisphere.letter(),
        )
    }
}

impl fmt::Display for DegMinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\" {}",
            self.degrees.unsigned_abs(),
            self.minutes,
            self.seconds,
            self.hemisphere
        )
    }
}

/// An angle split into whole degrees and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegMin {
    /// Signed whole degrees (truncated toward zero).
    pub degrees: i64,
    pub minutes: u32,
    pub hemisphere: Hemisphere,
}

impl fmt::Display for DegMin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}' {}",
            self.degrees.unsigned_abs(),
            self.minutes,
            self.hemisphere
        )
    }
}

/// Split a decimal angle into whole arc-seconds.
///
/// Returns `(signed degrees, remaining arc-seconds within the degree)`.
fn split_arc_seconds(value: f64) -> (i64, u32) {
    let total = (value * 3600.0) as i64;
    let degrees = total / 3600;
    let remainder = (total % 3600).unsigned_abs() as u32;
    (degrees, remainder)
}

/// Split decimal degrees into degrees, minutes and seconds.
#[must_use]
pub fn decimal_to_deg_min_sec(value: f64, is_latitude: bool) -> DegMinSec {
    let (degrees, remainder) = split_arc_seconds(value);
    DegMinSec {
        degrees,
        minutes: remainder / 60,
        seconds: remainder % 60,
        hemisphere: Hemisphere::from_parts(degrees, value, is_latitude),
    }
}

/// Split decimal degrees into degrees and minutes, dropping seconds.
#[must_use]
pub fn decimal_to_deg_min(value: f64, is_latitude: bool) -> DegMin {
    let (degrees, remainder) = split_arc_seconds(value);
    DegMin {
        degrees,
        minutes: remainder / 60,
        hemisphere: Hemisphere::from_parts(degrees, value, is_latitude),
    }
}

/// Combine degrees, minutes and seconds into signed decimal degrees.
///
/// `direction` of `S` or `W` (any case) negates the result. Anything else,
/// including unrecognized text, is treated as positive.
#[must_use]
pub fn deg_min_sec_to_decimal(degrees: f64, minutes: f64, seconds: f64, direction: &str) -> f64 {
    let direction = direction.trim();
    let sign = if direction.eq_ignore_ascii_case("S") || direction.eq_ignore_ascii_case("W") {
        -1.0
    } else {
        1.0
    };
    sign * (degrees + (minutes + seconds / 60.0) / 60.0)
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// An integer slot with minimum width and zero padding.
    Integer { width: usize, zero_pad: bool },
    /// The hemisphere letter slot.
    Text,
}

/// Which split a template expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Degree, minute, second and letter slots.
    DegMinSec,
    /// Degree, minute and letter slots.
    DegMin,
}

/// A printf-style coordinate template.
///
/// Supports `%d`/`%i` with optional zero flag and width (`%02d`), `%@`/`%s`
/// for the hemisphere letter, and `%%`. Slots are filled in the order degree,
/// minute, optional second, then letter; the letter must be the last slot.
/// Degrees are printed as absolute values since the letter carries the sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateTemplate {
    segments: Vec<Segment>,
    kind: TemplateKind,
}

/// Widest field a template may request.
const MAX_FIELD_WIDTH: usize = 32;

impl CoordinateTemplate {
    /// Default template with seconds: `%d°%02d'%02d" %@`.
    pub const DEG_MIN_SEC: &'static str = "%d°%02d'%02d\" %@";

    /// Default template without seconds: `%d°%02d' %@`.
    pub const DEG_MIN: &'static str = "%d°%02d' %@";

    /// Parse a template, inferring its kind from the number of integer slots.
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |detail: String| Error::InvalidTemplate {
            template: template.to_owned(),
            detail,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let zero_pad = chars.next_if_eq(&'0').is_some();
            let mut width = 0usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(digit as usize))
                    .filter(|&w| w <= MAX_FIELD_WIDTH)
                    .ok_or_else(|| invalid(format!("field width exceeds {MAX_FIELD_WIDTH}")))?;
                chars.next();
            }

            let segment = match chars.next() {
                Some('%') if !zero_pad && width == 0 => {
                    literal.push('%');
                    continue;
                }
                Some('d' | 'i') => Segment::Integer { width, zero_pad },
                Some('@' | 's') => Segment::Text,
                Some(other) => return Err(invalid(format!("unsupported conversion '%{other}'"))),
                None => return Err(invalid("dangling '%' at end".to_owned())),
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let slots: Vec<&Segment> = segments
            .iter()
            .filter(|s| !matches!(s, Segment::Literal(_)))
            .collect();
        let Some((last, integers)) = slots.split_last() else {
            return Err(invalid("no slots".to_owned()));
        };
        if **last != Segment::Text || integers.iter().any(|s| **s == Segment::Text) {
            return Err(invalid("the hemisphere slot must appear exactly once, last".to_owned()));
        }
        let kind = match integers.len() {
            3 => TemplateKind::DegMinSec,
            2 => TemplateKind::DegMin,
            n => {
                return Err(invalid(format!("expected 2 or 3 integer slots, found {n}")));
            }
        };

        Ok(Self { segments, kind })
    }

    /// Returns which split this template renders.
    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Format a decimal angle with this template.
    #[must_use]
    pub fn format(&self, value: f64, is_latitude: bool) -> String {
        match self.kind {
            TemplateKind::DegMinSec => {
                let dms = decimal_to_deg_min_sec(value, is_latitude);
                self.render(
                    &[
                        dms.degrees.unsigned_abs(),
                        u64::from(dms.minutes),
                        u64::from(dms.seconds),
                    ],
                    dms.hemisphere,
                )
            }
            TemplateKind::DegMin => {
                let dm = decimal_to_deg_min(value, is_latitude);
                self.render(
                    &[dm.degrees.unsigned_abs(), u64::from(dm.minutes)],
                    dm.hemisphere,
                )
            }
        }
    }

    /// Format a latitude/longitude pair.
    #[must_use]
    pub fn format_lat_lon(&self, lat: f64, lon: f64) -> (String, String) {
        (self.format(lat, true), self.format(lon, false))
    }

    fn render(&self, integers: &[u64], hemisphere: Hemisphere) -> String {
        let mut out = String::new();
        let mut values = integers.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Integer { width, zero_pad } => {
                    // Slot count was checked at parse time.
                    let value = values.next().copied().unwrap_or_default();
                    if *zero_pad {
                        out.push_str(&format!("{value:0width$}", width = *width));
                    } else {
                        out.push_str(&format!("{value:width$}", width = *width));
                    }
                }
                Segment::Text => out.push_str(hemisphere.letter()),
            }
        }
        out
    }
}

impl Default for CoordinateTemplate {
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Integer {
                    width: 0,
                    zero_pad: false,
                },
                Segment::Literal("°".to_owned()),
                Segment::Integer {
                    width: 2,
                    zero_pad: true,
                },
                Segment::Literal("'".to_owned()),
                Segment::Integer {
                    width: 2,
                    zero_pad: true,
                },
                Segment::Literal("\" ".to_owned()),
                Segment::Text,
            ],
            kind: TemplateKind::DegMinSec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARC_SECOND: f64 = 1.0 / 3600.0;

    #[test]
    fn test_deg_min_sec_split() {
        let dms = decimal_to_deg_min_sec(37.7749, true);
        assert_eq!(dms.degrees, 37);
        assert_eq!(dms.minutes, 46);
        assert_eq!(dms.seconds, 29);
        assert_eq!(dms.hemisphere, Hemisphere::North);

        let dms = decimal_to_deg_min_sec(-122.4194, false);
        assert_eq!(dms.degrees, -122);
        assert_eq!(dms.minutes, 25);
        assert_eq!(dms.seconds, 9);
        assert_eq!(dms.hemisphere, Hemisphere::West);
    }

    #[test]
    fn test_zero_degree_keeps_hemisphere() {
        let dms = decimal_to_deg_min_sec(-0.3, true);
        assert_eq!(dms.degrees, 0);
        assert_eq!(dms.minutes, 18);
        assert_eq!(dms.hemisphere, Hemisphere::South);

        let dm = decimal_to_deg_min(-0.3, false);
        assert_eq!(dm.hemisphere, Hemisphere::West);

        let dms = decimal_to_deg_min_sec(0.0, false);
        assert_eq!(dms.hemisphere, Hemisphere::East);
    }

    #[test]
    fn test_truncation_toward_zero() {
        // 59.9999 arc-seconds short of a degree stays in the lower degree.
        let dms = decimal_to_deg_min_sec(10.0 - 0.5 * ARC_SECOND, true);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds), (9, 59, 59));

        let dm = decimal_to_deg_min(-45.999, true);
        assert_eq!((dm.degrees, dm.minutes), (-45, 59));
    }

    #[test]
    fn test_display() {
        assert_eq!(decimal_to_deg_min_sec(37.7749, true).to_string(), "37°46'29\" N");
        assert_eq!(decimal_to_deg_min(-122.4194, false).to_string(), "122°25' W");
    }

    #[test]
    fn test_to_decimal_direction() {
        assert!((deg_min_sec_to_decimal(10.0, 30.0, 0.0, "S") + 10.5).abs() < 1e-12);
        assert!((deg_min_sec_to_decimal(10.0, 30.0, 0.0, "w") + 10.5).abs() < 1e-12);
        assert!((deg_min_sec_to_decimal(10.0, 30.0, 36.0, "E") - 10.51).abs() < 1e-12);
        // Malformed directions default to positive.
        assert!((deg_min_sec_to_decimal(10.0, 30.0, 0.0, "?") - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_representative_points() {
        for (lat, lon) in [(37.7749, -122.4194), (0.0, 0.0), (-0.3, 179.9)] {
            let back_lat = decimal_to_deg_min_sec(lat, true).to_decimal();
            let back_lon = decimal_to_deg_min_sec(lon, false).to_decimal();
            assert!((back_lat - lat).abs() <= ARC_SECOND, "{lat} -> {back_lat}");
            assert!((back_lon - lon).abs() <= ARC_SECOND, "{lon} -> {back_lon}");
        }
    }

    #[test]
    fn test_template_defaults_match_display() {
        let template = CoordinateTemplate::parse(CoordinateTemplate::DEG_MIN_SEC).unwrap();
        assert_eq!(template, CoordinateTemplate::default());
        assert_eq!(template.format(-33.8688, true), "33°52'07\" S");

        let template = CoordinateTemplate::parse(CoordinateTemplate::DEG_MIN).unwrap();
        assert_eq!(template.kind(), TemplateKind::DegMin);
        assert_eq!(template.format(151.2093, false), "151°12' E");
    }

    #[test]
    fn test_template_custom() {
        let err = CoordinateTemplate::parse("%@ %3d %d' %d\" (100%%)").unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate { .. }));

        let template = CoordinateTemplate::parse("%3d|%02d|%02d|%s").unwrap();
        let (lat, lon) = template.format_lat_lon(5.5, -0.01);
        assert_eq!(lat, "  5|30|00|N");
        assert_eq!(lon, "  0|00|36|W");
    }

    #[test]
    fn test_template_rejects_bad_slots() {
        assert!(CoordinateTemplate::parse("%d %d %@ %d").is_err());
        assert!(CoordinateTemplate::parse("%d %@").is_err());
        assert!(CoordinateTemplate::parse("%d %d %d").is_err());
        assert!(CoordinateTemplate::parse("%d %d %f %@").is_err());
        assert!(CoordinateTemplate::parse("%d %d %@ %").is_err());
    }

    #[test]
    fn test_template_rejects_oversized_width() {
        let overflowing = CoordinateTemplate::parse("%99999999999999999999999d %d %@");
        assert!(matches!(overflowing, Err(Error::InvalidTemplate { .. })));
        assert!(CoordinateTemplate::parse("%999999999999d %d %@").is_err());
        assert!(CoordinateTemplate::parse("%33d %d %@").is_err());

        let widest = CoordinateTemplate::parse("%32d %d %@").unwrap();
        assert_eq!(widest.format(5.5, true).len(), "32 30 N".len() + 30);
    }

    proptest! {
        #[test]
        fn dms_round_trip_within_an_arc_second(
            value in -180.0f64..180.0,
            is_latitude in any::<bool>(),
        ) {
            let back = decimal_to_deg_min_sec(value, is_latitude).to_decimal();
            prop_assert!((back - value).abs() <= ARC_SECOND + 1e-9, "{value} -> {back}");
        }
    }
}
