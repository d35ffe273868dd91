//! Shift categories.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// A shift category that can be assigned to a roster cell.
///
/// Categories are ordered alphabetically. The ordering is significant: within a
/// participant's row, a later category must never sit directly before an
/// earlier one.
///
/// # Examples
///
/// ```
/// use shiftpick_core::Shift;
///
/// assert!(Shift::A < Shift::E);
/// assert_eq!(Shift::from_char('c'), Some(Shift::C));
/// assert_eq!(Shift::from_char('x'), None);
/// assert_eq!(Shift::D.to_string(), "D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Shift {
    /// Category A.
    A = 0,
    /// Category B.
    B = 1,
    /// Category C.
    C = 2,
    /// Category D.
    D = 3,
    /// Category E.
    E = 4,
}

impl Shift {
    /// Number of categories in the alphabet.
    pub const COUNT: usize = 5;

    /// All categories in alphabetical order.
    pub const ALL: [Self; Self::COUNT] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Parses a category from a character, ignoring case.
    ///
    /// Returns `None` for characters outside the alphabet.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }

    /// Returns the uppercase letter for this category.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Returns the zero-based position of this category in [`Shift::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of shift categories.
///
/// Used to track which categories are present in a column.
///
/// # Examples
///
/// ```
/// use shiftpick_core::{Shift, ShiftSet};
///
/// let mut set = ShiftSet::EMPTY;
/// set.insert(Shift::B);
/// set.insert(Shift::D);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.complement().iter().collect::<Vec<_>>(), [Shift::A, Shift::C, Shift::E]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftSet {
    bits: u8,
}

impl ShiftSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set holding every category.
    pub const FULL: Self = Self { bits: 0b1_1111 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a category. Returns `true` if it was not already present.
    pub fn insert(&mut self, shift: Shift) -> bool {
        let added = !self.contains(shift);
        self.bits |= shift.bit();
        added
    }

    /// Removes a category. Returns `true` if it was present.
    pub fn remove(&mut self, shift: Shift) -> bool {
        let present = self.contains(shift);
        self.bits &= !shift.bit();
        present
    }

    /// Returns whether the category is in the set.
    #[must_use]
    pub const fn contains(self, shift: Shift) -> bool {
        self.bits & shift.bit() != 0
    }

    /// Returns the number of categories in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns whether every category is in the set.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.bits == Self::FULL.bits
    }

    /// Returns the categories not in this set.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self {
            bits: !self.bits & Self::FULL.bits,
        }
    }

    /// Iterates over the categories in alphabetical order.
    #[must_use]
    pub fn iter(self) -> ShiftSetIter {
        ShiftSetIter { set: self, next: 0 }
    }
}

impl FromIterator<Shift> for ShiftSet {
    fn from_iter<I: IntoIterator<Item = Shift>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for shift in iter {
            set.insert(shift);
        }
        set
    }
}

impl IntoIterator for ShiftSet {
    type Item = Shift;
    type IntoIter = ShiftSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ShiftSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in *self {
            write!(f, "{shift}")?;
        }
        Ok(())
    }
}

/// Iterator over the categories of a [`ShiftSet`].
#[derive(Debug, Clone)]
pub struct ShiftSetIter {
    set: ShiftSet,
    next: usize,
}

impl Iterator for ShiftSetIter {
    type Item = Shift;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&shift) = Shift::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(shift) {
                return Some(shift);
            }
        }
        None
    }
}

impl FusedIterator for ShiftSetIter {}
