// Plan format versions are "major.minor" (e.g. "1.2"), which is not valid semver on its own.
// Missing components are zero-filled before parsing: "1.2" -> "1.2.0", "1" -> "1.0.0".

pub fn parse_format_version(ver_str: &str) -> Result<semver::Version, semver::Error> {
    let ver_str = ver_str.trim();
    let components = ver_str.split('.').count();
    let padded = match components {
        1 => format!("{}.0.0", ver_str),
        2 => format!("{}.0", ver_str),
        _ => ver_str.to_string(),
    };
    semver::Version::parse(&padded)
}

/// True when `version` lies in `[min, max)`.
pub fn version_in_range(
    version: &semver::Version,
    min: &semver::Version,
    max: &semver::Version,
) -> bool {
    version >= min && version < max
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use semver::Version;

    #[test]
    fn test_parse_format_version() {
        assert_eq!(parse_format_version("1.2").unwrap(), Version::new(1, 2, 0));
        assert_eq!(parse_format_version("0.1").unwrap(), Version::new(0, 1, 0));
        assert_eq!(parse_format_version("1").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse_format_version("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert!(parse_format_version("one.two").is_err());
        assert!(parse_format_version("").is_err());
    }

    #[test]
    fn test_version_in_range() {
        let min = Version::new(0, 1, 0);
        let max = Version::new(2, 0, 0);
        assert!(version_in_range(&Version::new(1, 2, 0), &min, &max));
        assert!(version_in_range(&Version::new(0, 1, 0), &min, &max));
        assert!(!version_in_range(&Version::new(2, 0, 0), &min, &max));
        assert!(!version_in_range(&Version::new(99, 0, 0), &min, &max));
        assert!(!version_in_range(&Version::new(0, 0, 9), &min, &max));
    }
}
