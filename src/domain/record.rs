//! Roster record entity and its field rules

/// Identifier carried by every record. The textual protocol only admits
/// exactly eight decimal digits, so protocol ids always fit; the tree
/// itself accepts any `u32`.
pub type RecordId = u32;

/// Field width used when reporting ids found by name search.
pub const ID_WIDTH: usize = 8;

/// A single roster entry: a display name plus its unique id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique key the tree orders by
    pub id: RecordId,
    /// Display name, letters and spaces only
    pub name: String,
}

impl Record {
    pub fn new(name: impl Into<String>, id: RecordId) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A name may contain only ASCII letters and spaces. The empty string
/// passes vacuously.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Render an id for name-search output: right-aligned in a field of
/// [`ID_WIDTH`]. Ids wider than the field print unpadded.
pub fn format_id(id: RecordId) -> String {
    format!("{:>width$}", id, width = ID_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_spaced_names_are_valid() {
        assert!(is_valid_name("Brandon"));
        assert!(is_valid_name("Brandon Petersen"));
        assert!(is_valid_name("a"));
    }

    #[test]
    fn test_empty_name_is_valid() {
        assert!(is_valid_name(""));
    }

    #[test]
    fn test_names_with_digits_or_punctuation_are_invalid() {
        assert!(!is_valid_name("A11y"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name("Anna-Lena"));
        assert!(!is_valid_name("Bob\t"));
    }

    #[test]
    fn test_non_ascii_letters_are_invalid() {
        assert!(!is_valid_name("Renée"));
    }

    #[test]
    fn test_short_ids_are_right_aligned_to_eight() {
        assert_eq!(format_id(1), "       1");
        assert_eq!(format_id(45679999), "45679999");
    }

    #[test]
    fn test_wide_ids_print_unpadded() {
        assert_eq!(format_id(4294967295), "4294967295");
    }
}
