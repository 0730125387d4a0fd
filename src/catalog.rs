//! Catalog: the named rotor definitions a machine may load.

use std::collections::BTreeMap;

use crate::error::{EnigmaError, Result};
use crate::rotor::Rotor;

/// Rotor definitions indexed by name.
///
/// The catalog keeps pristine templates; a [`Machine`](crate::Machine)
/// copies a template into a slot on every setup, so stepping never
/// mutates catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    rotors: BTreeMap<String, Rotor>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `rotors`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateRotor`] if two rotors share a name.
    pub fn from_rotors<I>(rotors: I) -> Result<Self>
    where
        I: IntoIterator<Item = Rotor>,
    {
        let mut catalog = Catalog::new();
        for rotor in rotors {
            catalog.insert(rotor)?;
        }
        Ok(catalog)
    }

    /// Adds `rotor` under its own name.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateRotor`] if the name is taken.
    pub fn insert(&mut self, rotor: Rotor) -> Result<()> {
        if self.rotors.contains_key(rotor.name()) {
            return Err(EnigmaError::DuplicateRotor(rotor.name().to_string()));
        }
        self.rotors.insert(rotor.name().to_string(), rotor);
        Ok(())
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&Rotor> {
        self.rotors.get(name)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// True iff the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Rotor> + '_ {
        self.rotors.values()
    }
}
