pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Upper-cases an ISO 3166-1 alpha-2 code. Returns `None` unless the
    /// input is exactly two ASCII letters.
    pub fn normalize(region_code: &str) -> Option<String> {
        let region_code = region_code.trim();
        if region_code.len() != 2 || !region_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(region_code.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn normalizes_iso_codes() {
        assert_eq!(RegionCode::normalize("fr").as_deref(), Some("FR"));
        assert_eq!(RegionCode::normalize(" Kz ").as_deref(), Some("KZ"));
        assert_eq!(RegionCode::normalize("FRA"), None);
        assert_eq!(RegionCode::normalize("3F"), None);
        assert_eq!(RegionCode::normalize(""), None);
    }
}
