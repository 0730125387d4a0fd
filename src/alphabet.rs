//! Alphabet: contiguous run of symbols mapped to indices `0..size`.

use std::fmt;

use crate::error::{EnigmaError, Result};

/// Upper-case Latin letters, the alphabet of the historical machines.
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered, contiguous run of encodable symbols.
///
/// Symbol `k` has ordinal `first + k`, so lookups are plain arithmetic
/// and no table is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    first: char,
    size: usize,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            first: 'A',
            size: 26,
        }
    }
}

impl Alphabet {
    /// Builds an alphabet from `chars`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyAlphabet`] for empty text and
    /// [`EnigmaError::NonContiguousAlphabet`] when any symbol is not
    /// exactly one past its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alpha = Alphabet::new("ABCD").unwrap();
    /// assert_eq!(alpha.size(), 4);
    /// assert!(Alphabet::new("ABD").is_err());
    /// ```
    pub fn new(chars: &str) -> Result<Self> {
        let mut symbols = chars.chars();
        let first = symbols.next().ok_or(EnigmaError::EmptyAlphabet)?;
        let mut size = 1;
        for symbol in symbols {
            if symbol as u32 != first as u32 + size as u32 {
                return Err(EnigmaError::NonContiguousAlphabet {
                    symbol,
                    index: size,
                    first,
                });
            }
            size += 1;
        }
        Ok(Alphabet { first, size })
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First symbol of the run.
    pub fn first(&self) -> char {
        self.first
    }

    /// Last symbol of the run.
    pub fn last(&self) -> char {
        // Contiguity was checked at construction.
        char::from_u32(self.first as u32 + self.size as u32 - 1).unwrap_or(self.first)
    }

    /// Returns true iff `symbol` lies within the run.
    pub fn contains(&self, symbol: char) -> bool {
        let offset = (symbol as u32).wrapping_sub(self.first as u32);
        symbol >= self.first && (offset as usize) < self.size
    }

    /// Index of `symbol` within the run.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] for symbols outside the run.
    pub fn to_index(&self, symbol: char) -> Result<usize> {
        if !self.contains(symbol) {
            return Err(EnigmaError::SymbolOutOfRange(symbol));
        }
        Ok((symbol as u32 - self.first as u32) as usize)
    }

    /// Symbol at `index`. Inverse of [`to_index`](Self::to_index).
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] unless `index < size`.
    pub fn to_symbol(&self, index: usize) -> Result<char> {
        if index >= self.size {
            return Err(EnigmaError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        char::from_u32(self.first as u32 + index as u32).ok_or(EnigmaError::IndexOutOfRange {
            index,
            size: self.size,
        })
    }

    /// Iterates the symbols in index order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        (0..self.size).filter_map(move |i| char::from_u32(self.first as u32 + i as u32))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
