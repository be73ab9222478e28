use tracing::debug;

use crate::error::{Result, SemverError};
use crate::version::{Field, SemanticVersion};

/// The highest-order field that differs between `previous` and `latest`.
///
/// Falls back to [`Field::Patch`] when the versions are equal, which makes
/// the change a zero shift of the patch field.
#[must_use]
pub fn changed_field(previous: &SemanticVersion, latest: &SemanticVersion) -> Field {
    [Field::Major, Field::Minor]
        .into_iter()
        .find(|&field| previous.get(field) != latest.get(field))
        .unwrap_or(Field::Patch)
}

/// Applies the `previous` to `latest` change to `current`.
///
/// The result keeps `current`'s prefix. Fields below the changed one are
/// reset to zero.
pub fn apply_change(
    previous: &SemanticVersion,
    latest: &SemanticVersion,
    current: &SemanticVersion,
) -> Result<SemanticVersion> {
    let field = changed_field(previous, latest);
    let shifted = shift(
        field,
        current.get(field),
        previous.get(field),
        latest.get(field),
    )?;
    debug!(%field, from = current.get(field), to = shifted, "applying change");

    let (major, minor, patch) = match field {
        Field::Major => (shifted, 0, 0),
        Field::Minor => (current.core.major, shifted, 0),
        Field::Patch => (current.core.major, current.core.minor, shifted),
    };
    Ok(SemanticVersion::new(
        major,
        minor,
        patch,
        current.has_v_prefix,
    ))
}

/// Parses the three versions and returns the shifted `current` as a string.
pub fn compute_applied(previous: &str, latest: &str, current: &str) -> Result<String> {
    let previous = SemanticVersion::parse(previous)?;
    let latest = SemanticVersion::parse(latest)?;
    let current = SemanticVersion::parse(current)?;

    apply_change(&previous, &latest, &current).map(|version| version.to_string())
}

fn shift(field: Field, current: u64, previous: u64, latest: u64) -> Result<u64> {
    let shifted = i128::from(current) + i128::from(latest) - i128::from(previous);
    if shifted < 0 {
        return Err(SemverError::NegativeResult { field });
    }
    u64::try_from(shifted).map_err(|_| SemverError::Overflow { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(previous: &str, latest: &str, current: &str) -> Result<String> {
        compute_applied(previous, latest, current)
    }

    #[test]
    fn minor_change_resets_patch() {
        assert_eq!(compute("1.2.3", "1.3.0", "5.9.9").as_deref(), Ok("5.10.0"));
    }

    #[test]
    fn major_change_resets_minor_and_patch() {
        assert_eq!(compute("1.2.3", "2.0.0", "5.9.9").as_deref(), Ok("6.0.0"));
    }

    #[test]
    fn patch_change_keeps_current_prefix() {
        assert_eq!(
            compute("v1.2.3", "v1.2.5", "v1.2.10").as_deref(),
            Ok("v1.2.12")
        );
    }

    #[test]
    fn unchanged_versions_leave_current_as_is() {
        assert_eq!(compute("1.2.3", "1.2.3", "5.9.9").as_deref(), Ok("5.9.9"));
    }

    #[test]
    fn prefix_comes_from_current_only() {
        assert_eq!(compute("v1.0.0", "v1.0.1", "2.0.0").as_deref(), Ok("2.0.1"));
        assert_eq!(compute("1.0.0", "1.0.1", "V2.0.0").as_deref(), Ok("v2.0.1"));
    }

    #[test]
    fn major_change_dominates_lower_changes() {
        assert_eq!(compute("1.2.3", "3.0.9", "4.4.4").as_deref(), Ok("6.0.0"));
    }

    #[test]
    fn downward_major_change_is_applied() {
        assert_eq!(compute("3.1.0", "2.0.0", "5.4.3").as_deref(), Ok("4.0.0"));
    }

    #[test]
    fn pre_release_suffixes_are_ignored() {
        assert_eq!(
            compute("1.2.3-rc.1", "1.2.4+build", "v0.0.1-alpha").as_deref(),
            Ok("v0.0.2")
        );
    }

    #[test]
    fn negative_major_is_rejected() {
        assert_eq!(
            compute("2.0.0", "1.0.0", "0.5.0"),
            Err(SemverError::NegativeResult { field: Field::Major })
        );
    }

    #[test]
    fn negative_minor_is_rejected() {
        assert_eq!(
            compute("1.5.0", "1.2.0", "1.1.0"),
            Err(SemverError::NegativeResult { field: Field::Minor })
        );
    }

    #[test]
    fn negative_patch_is_rejected() {
        assert_eq!(
            compute("1.0.9", "1.0.0", "1.0.3"),
            Err(SemverError::NegativeResult { field: Field::Patch })
        );
    }

    #[test]
    fn result_beyond_u64_is_rejected() {
        let current = format!("{}.0.0", u64::MAX);

        assert_eq!(
            compute("1.0.0", "2.0.0", &current),
            Err(SemverError::Overflow { field: Field::Major })
        );
    }

    #[test]
    fn parse_failure_is_propagated() {
        assert_eq!(compute("", "1.0.0", "1.0.0"), Err(SemverError::Empty));
        assert!(matches!(
            compute("1.0.0", "1.0", "1.0.0"),
            Err(SemverError::InvalidFormat { .. })
        ));
        assert!(matches!(
            compute("1.0.0", "1.0.1", "1.x.0"),
            Err(SemverError::InvalidField {
                field: Field::Minor,
                ..
            })
        ));
    }

    #[test]
    fn changed_field_picks_highest_order_difference() {
        let base = SemanticVersion::new(1, 2, 3, false);

        assert_eq!(
            changed_field(&base, &SemanticVersion::new(2, 2, 4, false)),
            Field::Major
        );
        assert_eq!(
            changed_field(&base, &SemanticVersion::new(1, 0, 0, false)),
            Field::Minor
        );
        assert_eq!(changed_field(&base, &base), Field::Patch);
    }
}
