//! Orthographic context
//!
//! Every word type remembers in which (position, case) combinations it has
//! been seen. The six combinations are a closed set; their bit values match
//! the ones used by other Punkt models so snapshots can be exchanged.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Where a token sits relative to sentence boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// First token after a sentence break
    Initial,
    /// Inside a sentence
    Internal,
    /// Could not be determined (after an abbreviation, at a line start, ...)
    Unknown,
}

/// Case of a token's first character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// Upper-case letter
    Upper,
    /// Lower-case letter
    Lower,
    /// Not a cased letter (digit, punctuation, uncased script)
    None,
}

impl LetterCase {
    /// Classify a single character
    pub fn of(c: char) -> Self {
        if c.is_uppercase() {
            LetterCase::Upper
        } else if c.is_lowercase() {
            LetterCase::Lower
        } else {
            LetterCase::None
        }
    }
}

/// One observed (position, case) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrthoFlag {
    /// Upper-case at a sentence start
    BegUc,
    /// Upper-case inside a sentence
    MidUc,
    /// Upper-case, position unknown
    UnkUc,
    /// Lower-case at a sentence start
    BegLc,
    /// Lower-case inside a sentence
    MidLc,
    /// Lower-case, position unknown
    UnkLc,
}

impl OrthoFlag {
    /// Flag for a (position, case) pair; uncased tokens record nothing
    pub fn for_context(position: Position, case: LetterCase) -> Option<Self> {
        let flag = match (position, case) {
            (_, LetterCase::None) => return None,
            (Position::Initial, LetterCase::Upper) => OrthoFlag::BegUc,
            (Position::Internal, LetterCase::Upper) => OrthoFlag::MidUc,
            (Position::Unknown, LetterCase::Upper) => OrthoFlag::UnkUc,
            (Position::Initial, LetterCase::Lower) => OrthoFlag::BegLc,
            (Position::Internal, LetterCase::Lower) => OrthoFlag::MidLc,
            (Position::Unknown, LetterCase::Lower) => OrthoFlag::UnkLc,
        };
        Some(flag)
    }

    const fn bit(self) -> u32 {
        match self {
            OrthoFlag::BegUc => 1 << 1,
            OrthoFlag::MidUc => 1 << 2,
            OrthoFlag::UnkUc => 1 << 3,
            OrthoFlag::BegLc => 1 << 4,
            OrthoFlag::MidLc => 1 << 5,
            OrthoFlag::UnkLc => 1 << 6,
        }
    }
}

/// Set of [`OrthoFlag`]s observed for one word type
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrthoContext(u32);

impl OrthoContext {
    const UPPER: u32 = OrthoFlag::BegUc.bit() | OrthoFlag::MidUc.bit() | OrthoFlag::UnkUc.bit();
    const LOWER: u32 = OrthoFlag::BegLc.bit() | OrthoFlag::MidLc.bit() | OrthoFlag::UnkLc.bit();
    const ALL: u32 = Self::UPPER | Self::LOWER;

    /// No observations
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from a raw bit field, ignoring bits outside the six flags
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL)
    }

    /// Raw bit field as stored in model snapshots
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether nothing has been observed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `flag` has been observed
    pub const fn contains(self, flag: OrthoFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Record `flag`
    pub fn insert(&mut self, flag: OrthoFlag) {
        self.0 |= flag.bit();
    }

    /// Ever seen upper-case, in any position
    pub const fn has_upper(self) -> bool {
        self.0 & Self::UPPER != 0
    }

    /// Ever seen lower-case, in any position
    pub const fn has_lower(self) -> bool {
        self.0 & Self::LOWER != 0
    }
}

impl From<OrthoFlag> for OrthoContext {
    fn from(flag: OrthoFlag) -> Self {
        Self(flag.bit())
    }
}

impl BitOr for OrthoContext {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<OrthoFlag> for OrthoContext {
    type Output = Self;

    fn bitor(self, rhs: OrthoFlag) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign for OrthoContext {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for OrthoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMED: [(OrthoFlag, &str); 6] = [
            (OrthoFlag::BegUc, "BEG_UC"),
            (OrthoFlag::MidUc, "MID_UC"),
            (OrthoFlag::UnkUc, "UNK_UC"),
            (OrthoFlag::BegLc, "BEG_LC"),
            (OrthoFlag::MidLc, "MID_LC"),
            (OrthoFlag::UnkLc, "UNK_LC"),
        ];
        let names: Vec<&str> = NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "OrthoContext({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_for_context() {
        assert_eq!(
            OrthoFlag::for_context(Position::Initial, LetterCase::Upper),
            Some(OrthoFlag::BegUc)
        );
        assert_eq!(
            OrthoFlag::for_context(Position::Unknown, LetterCase::Lower),
            Some(OrthoFlag::UnkLc)
        );
        assert_eq!(OrthoFlag::for_context(Position::Internal, LetterCase::None), None);
    }

    #[test]
    fn test_bit_values_are_stable() {
        assert_eq!(OrthoContext::from(OrthoFlag::BegUc).bits(), 2);
        assert_eq!(OrthoContext::from(OrthoFlag::UnkLc).bits(), 64);
        let ctx = OrthoContext::from(OrthoFlag::BegUc) | OrthoFlag::MidLc;
        assert_eq!(ctx.bits(), 2 | 32);
    }

    #[test]
    fn test_derived_groups() {
        let mut ctx = OrthoContext::empty();
        assert!(!ctx.has_upper());
        assert!(!ctx.has_lower());

        ctx.insert(OrthoFlag::UnkUc);
        assert!(ctx.has_upper());
        assert!(!ctx.has_lower());

        ctx.insert(OrthoFlag::BegLc);
        assert!(ctx.has_lower());
        assert!(ctx.contains(OrthoFlag::BegLc));
        assert!(!ctx.contains(OrthoFlag::MidLc));
    }

    #[test]
    fn test_from_bits_truncate_drops_unknown_bits() {
        let ctx = OrthoContext::from_bits_truncate(1 | (1 << 2) | (1 << 9));
        assert_eq!(ctx.bits(), 1 << 2);
        assert!(ctx.contains(OrthoFlag::MidUc));
    }

    #[test]
    fn test_debug_lists_flags() {
        let ctx = OrthoContext::from(OrthoFlag::BegUc) | OrthoFlag::MidLc;
        assert_eq!(format!("{ctx:?}"), "OrthoContext(BEG_UC | MID_LC)");
    }
}
