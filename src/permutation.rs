//! Permutation: bijection on `[0, N)` described in cycle notation.
//!
//! Both directions are tabulated at construction so `permute` and
//! `invert` are single lookups after wrapping the argument.

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

/// A permutation of the indices of an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles`, a string such as `"(AELT) (BK) (S)"`.
    ///
    /// Symbols not named in any cycle map to themselves and whitespace is
    /// ignored. Cycles of length one are accepted and change nothing.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedCycles`] for unbalanced or nested
    /// parentheses, text outside parentheses, or a symbol named twice, and
    /// [`EnigmaError::SymbolOutOfRange`] for symbols outside `alphabet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let alpha = Alphabet::new("ABCD").unwrap();
    /// let perm = Permutation::new("(ABC)", alpha).unwrap();
    /// assert_eq!(perm.permute_symbol('C').unwrap(), 'A');
    /// assert_eq!(perm.invert_symbol('A').unwrap(), 'C');
    /// assert_eq!(perm.permute_symbol('D').unwrap(), 'D');
    /// ```
    pub fn new(cycles: &str, alphabet: Alphabet) -> Result<Self> {
        let size = alphabet.size();
        let mut perm = Permutation {
            alphabet,
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
        };
        let mut seen = vec![false; size];
        let mut current: Option<Vec<usize>> = None;

        for c in cycles.chars() {
            match c {
                '(' => {
                    if current.is_some() {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "nested '(' in \"{}\"",
                            cycles
                        )));
                    }
                    current = Some(Vec::new());
                }
                ')' => match current.take() {
                    Some(cycle) => perm.add_cycle(&cycle),
                    None => {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "unmatched ')' in \"{}\"",
                            cycles
                        )))
                    }
                },
                c if c.is_whitespace() => {}
                c => {
                    let Some(cycle) = current.as_mut() else {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "'{}' outside parentheses in \"{}\"",
                            c, cycles
                        )));
                    };
                    let index = alphabet.to_index(c)?;
                    if seen[index] {
                        return Err(EnigmaError::MalformedCycles(format!(
                            "'{}' appears more than once in \"{}\"",
                            c, cycles
                        )));
                    }
                    seen[index] = true;
                    cycle.push(index);
                }
            }
        }
        if current.is_some() {
            return Err(EnigmaError::MalformedCycles(format!(
                "unclosed '(' in \"{}\"",
                cycles
            )));
        }
        Ok(perm)
    }

    /// The identity permutation on `alphabet`.
    pub fn identity(alphabet: Alphabet) -> Self {
        let size = alphabet.size();
        Permutation {
            alphabet,
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
        }
    }

    /// Links `c0 -> c1 -> ... -> cm -> c0`.
    fn add_cycle(&mut self, cycle: &[usize]) {
        let len = cycle.len();
        if len < 2 {
            return;
        }
        for (i, &index) in cycle.iter().enumerate() {
            self.forward[index] = cycle[(i + 1) % len];
            self.inverse[index] = cycle[(i + len - 1) % len];
        }
    }

    /// Reduces `value` modulo the alphabet size into `[0, size)`.
    pub fn wrap(&self, value: isize) -> usize {
        value.rem_euclid(self.size() as isize) as usize
    }

    /// Size of the permuted alphabet.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// The alphabet this permutation was built on.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Image of `index`, taken modulo the size first.
    pub fn permute(&self, index: isize) -> usize {
        self.forward[self.wrap(index)]
    }

    /// Pre-image of `index`, taken modulo the size first.
    pub fn invert(&self, index: isize) -> usize {
        self.inverse[self.wrap(index)]
    }

    /// [`permute`](Self::permute) expressed on symbols.
    pub fn permute_symbol(&self, symbol: char) -> Result<char> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.forward[index])
    }

    /// [`invert`](Self::invert) expressed on symbols.
    pub fn invert_symbol(&self, symbol: char) -> Result<char> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.inverse[index])
    }

    /// Returns true iff no symbol maps to itself.
    pub fn derangement(&self) -> bool {
        self.inverse.iter().enumerate().all(|(i, &to)| i != to)
    }
}
