//! MachineConfig: parser for machine description text.
//!
//! The description starts with the alphabet on its own line, then the
//! slot and pawl counts, then one rotor per line:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ
//! 5 3
//! I MQ      (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! Beta N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B R       (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP)
//!           (RX) (SZ) (TV)
//! ```
//!
//! A rotor's type token is `M` followed by its notches, `N`, or `R`. A
//! line whose first non-blank character is `(` continues the cycles of the
//! rotor above it.

use std::str::FromStr;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::catalog::Catalog;
use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Description of the naval four-rotor machine and its rotor set.
pub const NAVAL_CONFIG: &str = "\
ABCDEFGHIJKLMNOPQRSTUVWXYZ
5 3
I MQ      (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
II ME     (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
III MV    (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
IV MJ     (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
V MZ      (AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)
VI MZM    (AJQDVLEOZWIYTS) (CGMNHFUX) (BPRK)
VII MZM   (ANOUPFRIMBZTLWKSVEGCJYDHXQ)
VIII MZM  (AFLSETWUNDHOZVICQ) (BKJ) (GXY) (MPR)
Beta N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
Gamma N   (AFNIRLBSQWVXGUZDKMTPCOYJHE)
B R       (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP)
          (RX) (SZ) (TV)
C R       (AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW)
          (QZ) (SX) (UY)
";

/// Everything needed to build a [`Machine`]: alphabet, geometry and the
/// rotor catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub alphabet: Alphabet,
    pub num_rotors: usize,
    pub num_pawls: usize,
    pub catalog: Catalog,
}

impl MachineConfig {
    /// Parses a machine description.
    ///
    /// # Errors
    /// - [`EnigmaError::ConfigTruncated`] if the alphabet or counts are missing.
    /// - [`EnigmaError::BadConfig`] for unreadable counts or rotor lines,
    ///   carrying the 1-based line number.
    /// - [`EnigmaError::DuplicateRotor`] for a rotor defined twice.
    /// - Alphabet errors for a bad first line.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let config = MachineConfig::parse("ABC\n3 1\nX MC (ABC)\nY N (AB)\nR R (ABC)\n").unwrap();
    /// assert_eq!(config.num_rotors, 3);
    /// assert_eq!(config.catalog.len(), 3);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, alphabet_line) = lines
            .next()
            .ok_or(EnigmaError::ConfigTruncated("missing alphabet"))?;
        let alphabet = Alphabet::new(alphabet_line)?;

        let mut counts = Vec::with_capacity(2);
        while counts.len() < 2 {
            let (number, line) = lines
                .next()
                .ok_or(EnigmaError::ConfigTruncated("missing rotor and pawl counts"))?;
            for token in line.split_whitespace() {
                if counts.len() == 2 {
                    return Err(EnigmaError::BadConfig {
                        line: number,
                        reason: format!("unexpected '{}' after rotor and pawl counts", token),
                    });
                }
                let count = token.parse::<usize>().map_err(|_| EnigmaError::BadConfig {
                    line: number,
                    reason: format!("'{}' is not a count", token),
                })?;
                counts.push(count);
            }
        }

        // Join continuation lines onto the rotor line they extend.
        let mut descriptions: Vec<(usize, String)> = Vec::new();
        for (number, line) in lines {
            if line.starts_with('(') {
                let (_, description) =
                    descriptions
                        .last_mut()
                        .ok_or_else(|| EnigmaError::BadConfig {
                            line: number,
                            reason: "cycles with no rotor name".to_string(),
                        })?;
                description.push(' ');
                description.push_str(line);
            } else {
                descriptions.push((number, line.to_string()));
            }
        }

        let mut catalog = Catalog::new();
        for (number, description) in &descriptions {
            catalog.insert(parse_rotor(*number, description, alphabet)?)?;
        }

        debug!(
            alphabet = %alphabet,
            num_rotors = counts[0],
            num_pawls = counts[1],
            rotors = catalog.len(),
            "machine description loaded"
        );
        Ok(MachineConfig {
            alphabet,
            num_rotors: counts[0],
            num_pawls: counts[1],
            catalog,
        })
    }

    /// The built-in naval machine description, [`NAVAL_CONFIG`].
    pub fn naval() -> Result<Self> {
        Self::parse(NAVAL_CONFIG)
    }

    /// Builds a fresh, unconfigured machine. Each call gets its own rotor
    /// state.
    ///
    /// # Errors
    /// Any error of [`Machine::new`].
    pub fn build_machine(&self) -> Result<Machine> {
        Machine::new(
            self.alphabet,
            self.num_rotors,
            self.num_pawls,
            self.catalog.clone(),
        )
    }
}

impl FromStr for MachineConfig {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parses `<name> <type> <cycles...>`.
fn parse_rotor(line: usize, description: &str, alphabet: Alphabet) -> Result<Rotor> {
    let bad = |reason: String| EnigmaError::BadConfig { line, reason };

    let (name, rest) = split_token(description);
    let (type_token, cycles) = split_token(rest);
    if type_token.is_empty() {
        return Err(bad(format!("rotor {} has no type", name)));
    }
    let permutation =
        Permutation::new(cycles, alphabet).map_err(|err| bad(format!("rotor {}: {}", name, err)))?;
    Rotor::from_type_token(name, type_token, permutation)
        .map_err(|err| bad(format!("rotor {}: {}", name, err)))
}

/// Splits off the first whitespace-delimited token.
fn split_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => (&text[..at], text[at..].trim_start()),
        None => (text, ""),
    }
}
