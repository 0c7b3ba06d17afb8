//! Problem instances and completions.
//!
//! An [`Instance`] can only be built through [`Instance::new`] or
//! [`Instance::parse`], so every value of that type is well formed:
//! `n >= 1`, `k >= 1`, and both the pattern and the reference have length `n`.
//! `k > n` is allowed; the run constraint simply never fires.

use crate::error::InstanceError;
use std::fmt;
use std::ops::Deref;

/// A binary symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Both symbols in ascending order.
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    pub fn from_char(c: char) -> Option<Bit> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

/// One position of a pattern: either pinned to a symbol or free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Fixed(Bit),
    Free,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '?' => Some(Cell::Free),
            other => Bit::from_char(other).map(Cell::Fixed),
        }
    }

    /// Symbols this cell may take, in ascending order.
    pub fn candidates(self) -> &'static [Bit] {
        match self {
            Cell::Fixed(Bit::Zero) => &[Bit::Zero],
            Cell::Fixed(Bit::One) => &[Bit::One],
            Cell::Free => &[Bit::Zero, Bit::One],
        }
    }

    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Free)
    }

    #[inline]
    pub fn admits(self, bit: Bit) -> bool {
        match self {
            Cell::Fixed(b) => b == bit,
            Cell::Free => true,
        }
    }
}

/// An immutable, validated problem instance `(n, k, pattern, reference)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    k: usize,
    pattern: Vec<Cell>,
    reference: Vec<Bit>,
}

impl Instance {
    /// Build an instance, rejecting malformed input before any search.
    pub fn new(
        n: usize,
        k: usize,
        pattern: Vec<Cell>,
        reference: Vec<Bit>,
    ) -> Result<Self, InstanceError> {
        if n == 0 {
            return Err(InstanceError::EmptyString);
        }
        if k == 0 {
            return Err(InstanceError::ZeroRunBound);
        }
        if pattern.len() != n {
            return Err(InstanceError::LengthMismatch {
                field: "pattern",
                expected: n,
                found: pattern.len(),
            });
        }
        if reference.len() != n {
            return Err(InstanceError::LengthMismatch {
                field: "reference",
                expected: n,
                found: reference.len(),
            });
        }
        Ok(Self {
            k,
            pattern,
            reference,
        })
    }

    /// Build an instance from the text alphabet: `0`, `1`, `?` for the
    /// pattern and `0`, `1` for the reference.
    pub fn parse(
        n: usize,
        k: usize,
        pattern: &str,
        reference: &str,
    ) -> Result<Self, InstanceError> {
        let pattern = pattern
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Cell::from_char(c).ok_or(InstanceError::InvalidSymbol {
                    field: "pattern",
                    index,
                    found: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let reference = reference
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Bit::from_char(c).ok_or(InstanceError::InvalidSymbol {
                    field: "reference",
                    index,
                    found: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(n, k, pattern, reference)
    }

    /// String length `n`; always at least 1.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Minimum forbidden run length.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn pattern(&self) -> &[Cell] {
        &self.pattern
    }

    pub fn reference(&self) -> &[Bit] {
        &self.reference
    }

    /// Number of free positions in the pattern.
    pub fn free_count(&self) -> usize {
        self.pattern.iter().filter(|c| c.is_free()).count()
    }

    /// Cost of placing `bit` at position `i`.
    #[inline]
    pub fn deviation(&self, i: usize, bit: Bit) -> usize {
        usize::from(self.reference[i] != bit)
    }

    /// True if `bits` agrees with every fixed position of the pattern.
    pub fn admits(&self, bits: &[Bit]) -> bool {
        bits.len() == self.len()
            && self
                .pattern
                .iter()
                .zip(bits)
                .all(|(cell, &bit)| cell.admits(bit))
    }
}

/// A full assignment of `n` symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Completion(Vec<Bit>);

impl Completion {
    pub fn new(bits: Vec<Bit>) -> Self {
        Self(bits)
    }
}

impl Deref for Completion {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.0
    }
}

impl From<Vec<Bit>> for Completion {
    fn from(bits: Vec<Bit>) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit.as_char())?;
        }
        Ok(())
    }
}
