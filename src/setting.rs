//! Setting: one parsed setting line.
//!
//! A setting line looks like
//! `* B Beta III IV I AXLE [RING] (HQ) (EX) (IP) (TR) (BY)`: a `*`
//! marker, the rotor names from the reflector rightwards, the starting
//! positions, optional ring settings, and plugboard cycles.

use std::fmt;

use crate::error::{EnigmaError, Result};

/// Marker that introduces a setting line.
pub const SETTING_MARKER: char = '*';

/// Rotor selection and key for one machine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Rotor names, slot 0 first.
    pub rotors: Vec<String>,
    /// One position symbol per non-reflector slot.
    pub positions: String,
    /// One ring symbol per non-reflector slot, if given.
    pub rings: Option<String>,
    /// Plugboard cycle text; empty for no plugboard.
    pub plugboard: String,
}

impl Setting {
    /// Parses `line` for a machine with `num_rotors` slots.
    ///
    /// Only the shape of the line is checked here. Rotor names and
    /// symbols are validated when the setting is applied.
    ///
    /// # Errors
    /// - [`EnigmaError::MissingSettingMarker`] if the line lacks `*`.
    /// - [`EnigmaError::TooFewRotors`] if fewer than `num_rotors` names appear.
    /// - [`EnigmaError::BadSettingLength`] if the positions token is missing.
    /// - [`EnigmaError::UnexpectedSettingToken`] for tokens after the rings.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Setting;
    ///
    /// let s = Setting::parse("* B Beta III IV I AXLE (HQ) (EX)", 5).unwrap();
    /// assert_eq!(s.rotors, ["B", "Beta", "III", "IV", "I"]);
    /// assert_eq!(s.positions, "AXLE");
    /// assert_eq!(s.rings, None);
    /// assert_eq!(s.plugboard, "(HQ) (EX)");
    /// ```
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self> {
        let body = line
            .trim()
            .strip_prefix(SETTING_MARKER)
            .ok_or_else(|| EnigmaError::MissingSettingMarker(line.trim().to_string()))?;

        let (head, plugboard) = match body.find('(') {
            Some(at) => (&body[..at], body[at..].trim()),
            None => (body, ""),
        };

        let mut tokens = head.split_whitespace();
        let rotors: Vec<String> = tokens.by_ref().take(num_rotors).map(str::to_string).collect();
        if rotors.len() < num_rotors {
            return Err(EnigmaError::TooFewRotors {
                expected: num_rotors,
                found: rotors.len(),
            });
        }
        let positions = tokens
            .next()
            .ok_or_else(|| EnigmaError::BadSettingLength {
                what: "positions",
                expected: num_rotors.saturating_sub(1),
                found: String::new(),
            })?
            .to_string();
        let rings = tokens.next().map(str::to_string);
        if let Some(extra) = tokens.next() {
            return Err(EnigmaError::UnexpectedSettingToken(extra.to_string()));
        }

        Ok(Setting {
            rotors,
            positions,
            rings,
            plugboard: plugboard.to_string(),
        })
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SETTING_MARKER)?;
        for name in &self.rotors {
            write!(f, " {}", name)?;
        }
        write!(f, " {}", self.positions)?;
        if let Some(rings) = &self.rings {
            write!(f, " {}", rings)?;
        }
        if !self.plugboard.is_empty() {
            write!(f, " {}", self.plugboard)?;
        }
        Ok(())
    }
}
