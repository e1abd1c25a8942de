//! Department code normalization.

/// Map path id of Corse-du-Sud.
pub const CORSE_DU_SUD_ID: u32 = 20;
/// Map path id of Haute-Corse.
pub const HAUTE_CORSE_ID: u32 = 21;

/// Maps a raw department code to the numeric id of its map path.
///
/// - `"2A"` → 20, `"2B"` → 21
/// - numeric codes from 21 upwards → code + 1
/// - numeric codes below 21 → unchanged (`"01"` → 1)
///
/// Returns `None` for anything else (empty, negative, other letters).
pub fn normalize_department_code(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("2A") {
        return Some(CORSE_DU_SUD_ID);
    }
    if raw.eq_ignore_ascii_case("2B") {
        return Some(HAUTE_CORSE_ID);
    }

    let code: u32 = raw.parse().ok()?;
    if code >= HAUTE_CORSE_ID {
        code.checked_add(1)
    } else {
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corsica() {
        assert_eq!(normalize_department_code("2A"), Some(20));
        assert_eq!(normalize_department_code("2B"), Some(21));
        assert_eq!(normalize_department_code("2b"), Some(21));
    }

    #[test]
    fn test_codes_from_21_shift_by_one() {
        assert_eq!(normalize_department_code("21"), Some(22));
        assert_eq!(normalize_department_code("22"), Some(23));
        assert_eq!(normalize_department_code("75"), Some(76));
        assert_eq!(normalize_department_code("95"), Some(96));
    }

    #[test]
    fn test_codes_below_21_unchanged() {
        assert_eq!(normalize_department_code("10"), Some(10));
        assert_eq!(normalize_department_code("01"), Some(1));
        assert_eq!(normalize_department_code("19"), Some(19));
        assert_eq!(normalize_department_code(" 5 "), Some(5));
    }

    #[test]
    fn test_unparseable_codes_do_not_match() {
        assert_eq!(normalize_department_code(""), None);
        assert_eq!(normalize_department_code("2C"), None);
        assert_eq!(normalize_department_code("-3"), None);
        assert_eq!(normalize_department_code("Paris"), None);
        assert_eq!(normalize_department_code("4294967295"), None);
    }
}
