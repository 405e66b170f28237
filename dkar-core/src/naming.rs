//! Mapping of source state names to canonical state names.
//!
//! Names of the form `q<N>` become the letter at offset `N` from `A`
//! (`q0` -> `A`, `q1` -> `B`, ...). Anything not starting with `q` is kept.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// First letter handed out to `q<N>` names.
pub const FIRST_STATE_LETTER: char = 'A';

/// Highest `N` for which `q<N>` maps to a Latin capital letter.
pub const LAST_LETTER_INDEX: u32 = 25;

/// What to do with `q<N>` names beyond [`LAST_LETTER_INDEX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep plain code-point arithmetic (`q26` -> `[`).
    #[default]
    Preserve,
    /// Fail with [`CoreError::OutOfRange`].
    Reject,
}

/// Translates source state names into canonical names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMapper {
    overflow: OverflowPolicy,
}

impl NameMapper {
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Maps a name that may be missing in the source.
    pub fn map_optional(&self, name: Option<&str>) -> Result<String, CoreError> {
        match name {
            Some(name) => self.map(name),
            None => Err(CoreError::invalid_argument("state name must not be missing")),
        }
    }

    /// Maps a single state name.
    pub fn map(&self, name: &str) -> Result<String, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::invalid_argument("state name must not be blank"));
        }

        let Some(suffix) = name.strip_prefix('q') else {
            return Ok(name.to_string());
        };

        let index = parse_index(suffix).ok_or_else(|| CoreError::InvalidFormat {
            reason: format!("state name '{}' is not of the form q<number>", name),
        })?;

        if self.overflow == OverflowPolicy::Reject && index > LAST_LETTER_INDEX {
            return Err(CoreError::OutOfRange {
                name: name.to_string(),
                index,
            });
        }

        (FIRST_STATE_LETTER as u32)
            .checked_add(index)
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| CoreError::OutOfRange {
                name: name.to_string(),
                index,
            })
    }
}

/// Maps a state name with the default [`OverflowPolicy::Preserve`] policy.
pub fn map_state_name(name: &str) -> Result<String, CoreError> {
    NameMapper::default().map(name)
}

// Decimal digits only; signs and whitespace are rejected.
fn parse_index(suffix: &str) -> Option<u32> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_maps_q_names_to_letters() {
        assert_eq!(map_state_name("q0").unwrap(), "A");
        assert_eq!(map_state_name("q1").unwrap(), "B");
        assert_eq!(map_state_name("q25").unwrap(), "Z");
        assert_eq!(map_state_name("q007").unwrap(), "H");
    }

    #[test]
    fn test_other_names_unchanged() {
        assert_eq!(map_state_name("start").unwrap(), "start");
        assert_eq!(map_state_name("Q1").unwrap(), "Q1");
        assert_eq!(map_state_name("A").unwrap(), "A");
    }

    #[test]
    fn test_blank_names_rejected() {
        for name in ["", " ", "\t\n"] {
            assert!(matches!(
                map_state_name(name),
                Err(CoreError::InvalidArgument { .. })
            ));
        }
        assert!(matches!(
            NameMapper::default().map_optional(None),
            Err(CoreError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_non_numeric_suffix_rejected() {
        for name in ["qX", "q", "q1a", "q-1", "q+1", "q 1", "q99999999999"] {
            assert!(
                matches!(map_state_name(name), Err(CoreError::InvalidFormat { .. })),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_overflow_preserved() {
        assert_eq!(map_state_name("q26").unwrap(), "[");
        assert_eq!(map_state_name("q32").unwrap(), "a");
    }

    #[test]
    fn test_overflow_rejected_by_policy() {
        let mapper = NameMapper::new(OverflowPolicy::Reject);
        assert_eq!(mapper.map("q25").unwrap(), "Z");
        assert!(matches!(
            mapper.map("q26"),
            Err(CoreError::OutOfRange { index: 26, .. })
        ));
    }

    #[test]
    fn test_no_char_for_code_point() {
        // 'A' + 55231 lands on the first surrogate, 0xD800.
        assert!(matches!(
            map_state_name("q55231"),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            map_state_name("q4294967295"),
            Err(CoreError::OutOfRange { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_q_index_maps_to_letter(n in 0u32..=25) {
            let mapped = map_state_name(&format!("q{}", n)).unwrap();
            let expected = char::from_u32('A' as u32 + n).unwrap().to_string();
            prop_assert_eq!(mapped, expected);
        }

        #[test]
        fn prop_identity_without_q_prefix(name in "[^q\\s][^\\n]{0,12}") {
            prop_assert_eq!(map_state_name(&name).unwrap(), name);
        }
    }
}
