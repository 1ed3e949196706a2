//! Component bumping.

use std::fmt;

use tracing::debug;

use crate::error::BumpError;

use super::parse::{MAX_COMPONENTS, Version};

/// Fewest components a bumped version is rendered with (MAJOR.MINOR).
pub const MIN_COMPONENTS: usize = 2;

/// Which version component to increment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpTarget {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpTarget {
    /// Position of the component this target increments.
    pub fn index(self) -> usize {
        match self {
            BumpTarget::Major => 0,
            BumpTarget::Minor => 1,
            BumpTarget::Patch => 2,
        }
    }
}

impl fmt::Display for BumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpTarget::Major => write!(f, "major"),
            BumpTarget::Minor => write!(f, "minor"),
            BumpTarget::Patch => write!(f, "patch"),
        }
    }
}

impl Version {
    /// Increment the `target` component and reset every lower-order one to zero.
    ///
    /// The result keeps all components up to and including the bumped one,
    /// and never fewer than [`MIN_COMPONENTS`]:
    /// - `1.2.3` + patch = `1.2.4`
    /// - `1.2.3` + minor = `1.3`
    /// - `1.2.3` + major = `2.0`
    ///
    /// The bumped component and every component before it must be a
    /// non-negative decimal integer, so `1.b.3` + patch is rejected rather
    /// than carried through as `1.b.4`. Components after the bumped one are
    /// reset without being checked. There is no upper bound on a component:
    /// the increment is done on the decimal text.
    pub fn bump(&self, target: BumpTarget) -> Result<Version, BumpError> {
        let idx = target.index();

        let mut components = self.components().to_vec();
        components.resize(MAX_COMPONENTS, "0".to_string());

        for (index, value) in components.iter().enumerate().take(idx) {
            check_numeric(index, value)?;
        }

        check_numeric(idx, &components[idx])?;
        components[idx] = increment_decimal(&components[idx]);

        for component in components.iter_mut().skip(idx + 1) {
            *component = "0".to_string();
        }

        components.truncate(MIN_COMPONENTS.max(idx + 1));

        Ok(Version::from_parts(self.prefix(), components))
    }
}

/// Parse, bump and render a version string in one step.
///
/// This is the whole of what the `vbump` binary does before printing.
pub fn bump(raw: &str, target: BumpTarget) -> Result<String, BumpError> {
    debug!(input = raw, target = %target, "Bumping version");

    let bumped = Version::parse(raw)?.bump(target)?;

    debug!(output = %bumped, "Bumped version");
    Ok(bumped.to_string())
}

fn check_numeric(index: usize, value: &str) -> Result<(), BumpError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::NonNumericComponent {
            index,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Add one to a string of ASCII digits, dropping any leading zeros.
fn increment_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();

    let mut carry = true;
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    // Only ASCII digits were written.
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_indices() {
        assert_eq!(BumpTarget::Major.index(), 0);
        assert_eq!(BumpTarget::Minor.index(), 1);
        assert_eq!(BumpTarget::Patch.index(), 2);
    }

    #[test]
    fn test_default_target_is_patch() {
        assert_eq!(BumpTarget::default(), BumpTarget::Patch);
    }

    #[test]
    fn test_patch_bump() {
        assert_eq!(bump("1.2.3", BumpTarget::Patch).unwrap(), "1.2.4");
    }

    #[test]
    fn test_minor_bump_drops_patch() {
        assert_eq!(bump("1.2.3", BumpTarget::Minor).unwrap(), "1.3");
    }

    #[test]
    fn test_major_bump_keeps_two_components() {
        assert_eq!(bump("1.2.3", BumpTarget::Major).unwrap(), "2.0");
    }

    #[test]
    fn test_prefix_with_padding() {
        assert_eq!(bump("v1.2", BumpTarget::Patch).unwrap(), "v1.2.1");
    }

    #[test]
    fn test_single_component_patch() {
        assert_eq!(bump("5", BumpTarget::Patch).unwrap(), "5.0.1");
    }

    #[test]
    fn test_bumped_component_loses_leading_zeros() {
        assert_eq!(bump("1.2.009", BumpTarget::Patch).unwrap(), "1.2.10");
        assert_eq!(bump("01.2.3", BumpTarget::Patch).unwrap(), "01.2.4");
    }

    #[test]
    fn test_non_numeric_bumped_component() {
        let err = bump("1.2.x", BumpTarget::Patch).unwrap_err();
        assert_eq!(
            err,
            BumpError::NonNumericComponent {
                index: 2,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_higher_component() {
        let err = bump("1.b.3", BumpTarget::Patch).unwrap_err();
        assert!(matches!(err, BumpError::NonNumericComponent { index: 1, .. }));
    }

    #[test]
    fn test_non_numeric_lower_component_is_reset() {
        assert_eq!(bump("1.2.rc1", BumpTarget::Minor).unwrap(), "1.3");
    }

    #[test]
    fn test_empty_component() {
        let err = bump("1..3", BumpTarget::Patch).unwrap_err();
        assert!(matches!(err, BumpError::NonNumericComponent { index: 1, .. }));
    }

    #[test]
    fn test_increment_decimal() {
        assert_eq!(increment_decimal("0"), "1");
        assert_eq!(increment_decimal("000"), "1");
        assert_eq!(increment_decimal("9"), "10");
        assert_eq!(increment_decimal("0199"), "200");
        assert_eq!(increment_decimal("999"), "1000");
    }

    #[test]
    fn test_components_beyond_u64() {
        let raw = format!("1.2.{}", u64::MAX);
        assert_eq!(
            bump(&raw, BumpTarget::Patch).unwrap(),
            "1.2.18446744073709551616"
        );

        let huge = "99999999999999999999999999999999999999.5.1";
        assert_eq!(
            bump(huge, BumpTarget::Major).unwrap(),
            "100000000000000000000000000000000000000.0"
        );
    }

    #[test]
    fn test_bump_short_version_value() {
        let minor = Version::parse("1.2.3").unwrap().bump(BumpTarget::Minor).unwrap();
        assert_eq!(minor.components().len(), 2);

        let patched = minor.bump(BumpTarget::Patch).unwrap();
        assert_eq!(patched.to_string(), "1.3.1");
    }
}
