//! Cell merge strategies.
//!
//! When one grid is blitted onto another, every destination cell is replaced by
//! `merge(source_cell, destination_cell)`. [`Overwrite`] is the plain copy used
//! by every layout component; [`Union`] lets designated blank characters act as
//! transparent so overlapping drawings combine instead of clobbering each other.

/// Combines a source cell with the destination cell it lands on.
pub trait CellMerge {
    fn merge(&self, source: char, destination: char) -> char;
}

impl<F> CellMerge for F
where
    F: Fn(char, char) -> char,
{
    #[inline]
    fn merge(&self, source: char, destination: char) -> char {
        self(source, destination)
    }
}

// =============================================================================
// Overwrite
// =============================================================================

/// The source cell always wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overwrite;

impl CellMerge for Overwrite {
    #[inline]
    fn merge(&self, source: char, _destination: char) -> char {
        source
    }
}

// =============================================================================
// Union
// =============================================================================

/// Which side wins a [`Union`] merge when blank-ness does not decide it.
///
/// A union is only commutative over booleans. Once cells carry arbitrary
/// characters, two non-blank (or two different blank) cells need a tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preserve {
    /// Keep the source cell.
    #[default]
    Origin,
    /// Keep the destination cell.
    Destination,
}

/// Blank characters are transparent; a non-blank cell beats a blank one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    blank: Vec<char>,
    preserve: Preserve,
}

impl Union {
    pub fn new(blank: impl IntoIterator<Item = char>, preserve: Preserve) -> Self {
        Self {
            blank: blank.into_iter().collect(),
            preserve,
        }
    }

    #[inline]
    fn is_blank(&self, c: char) -> bool {
        self.blank.contains(&c)
    }
}

impl Default for Union {
    /// Spaces are transparent, ties keep the source.
    fn default() -> Self {
        Self::new([crate::types::BLANK], Preserve::Origin)
    }
}

impl CellMerge for Union {
    fn merge(&self, source: char, destination: char) -> char {
        match (self.is_blank(source), self.is_blank(destination)) {
            (true, false) => destination,
            (false, true) => source,
            _ => match self.preserve {
                Preserve::Origin => source,
                Preserve::Destination => destination,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANKS: [char; 2] = [' ', '.'];

    #[test]
    fn test_overwrite_ignores_destination() {
        assert_eq!(Overwrite.merge('a', 'b'), 'a');
        assert_eq!(Overwrite.merge(' ', 'b'), ' ');
    }

    #[test]
    fn test_union_preserve_origin() {
        let union = Union::new(BLANKS, Preserve::Origin);

        // (left, right, merge(left, right), merge(right, left))
        let cases = [
            // Only one of them is blank.
            ('x', ' ', 'x', 'x'),
            // Both are blank.
            (' ', '.', ' ', '.'),
            // Neither is blank.
            ('x', 'y', 'x', 'y'),
        ];

        for (left, right, expected_left, expected_right) in cases {
            assert_eq!(union.merge(left, right), expected_left, "{left:?} onto {right:?}");
            assert_eq!(union.merge(right, left), expected_right, "{right:?} onto {left:?}");
        }
    }

    #[test]
    fn test_union_preserve_destination() {
        let union = Union::new(BLANKS, Preserve::Destination);

        let cases = [
            ('x', ' ', 'x', 'x'),
            (' ', '.', '.', ' '),
            ('x', 'y', 'y', 'x'),
        ];

        for (left, right, expected_left, expected_right) in cases {
            assert_eq!(union.merge(left, right), expected_left, "{left:?} onto {right:?}");
            assert_eq!(union.merge(right, left), expected_right, "{right:?} onto {left:?}");
        }
    }

    #[test]
    fn test_closures_are_merge_strategies() {
        let upper = |s: char, _d: char| s.to_ascii_uppercase();
        assert_eq!(upper.merge('a', 'b'), 'A');
    }
}
