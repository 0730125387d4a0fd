//! Rotor: a keyed permutation with rotational state.
//!
//! The three physical rotor types share one record and differ only in
//! their [`RotorKind`] tag. Rotors placed in a machine live in a
//! [`RotorArena`] and refer to their left neighbour by [`SlotId`], so the
//! stepping cascade walks indices instead of shared pointers.

use std::fmt;
use std::slice;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;

/// Type tag of a moving rotor in a machine description.
pub const MOVING: char = 'M';
/// Type tag of a fixed (non-stepping) rotor.
pub const FIXED: char = 'N';
/// Type tag of a reflector.
pub const REFLECTOR: char = 'R';

/// Behavioural variant of a rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Never rotates; sends the signal back through the stack.
    Reflector,
    /// Holds a position and ring setting but never steps.
    Fixed,
    /// Steps under the pawl mechanism. `notches` holds alphabet indices.
    Moving { notches: Vec<usize> },
}

/// Position of a rotor within a machine's slot array. Slot 0 is the
/// reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotId(pub usize);

/// A named rotor and its current rotational state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    permutation: Permutation,
    kind: RotorKind,
    position: usize,
    ring: usize,
    pawl: bool,
    left: Option<SlotId>,
}

impl Rotor {
    fn build(name: &str, permutation: Permutation, kind: RotorKind) -> Self {
        Rotor {
            name: name.to_string(),
            permutation,
            kind,
            position: 0,
            ring: 0,
            pawl: false,
            left: None,
        }
    }

    /// A moving rotor whose notches sit at the symbols of `notches`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolOutOfRange`] for a notch outside the
    /// permutation's alphabet.
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self> {
        let alphabet = *permutation.alphabet();
        let mut indices = notches
            .chars()
            .map(|c| alphabet.to_index(c))
            .collect::<Result<Vec<_>>>()?;
        indices.sort_unstable();
        indices.dedup();
        Ok(Self::build(name, permutation, RotorKind::Moving { notches: indices }))
    }

    /// A rotor that keeps whatever position it is given.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Self::build(name, permutation, RotorKind::Fixed)
    }

    /// A reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ReflectorNotDerangement`] if the wiring maps
    /// any symbol to itself.
    pub fn reflector(name: &str, permutation: Permutation) -> Result<Self> {
        if !permutation.derangement() {
            return Err(EnigmaError::ReflectorNotDerangement(name.to_string()));
        }
        Ok(Self::build(name, permutation, RotorKind::Reflector))
    }

    /// Builds a rotor from its type token as written in a machine
    /// description: `R`, `N`, or `M` followed by the notch symbols.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnsupportedRotorType`] for any other tag,
    /// plus the errors of the individual constructors.
    pub fn from_type_token(name: &str, token: &str, permutation: Permutation) -> Result<Self> {
        let mut chars = token.chars();
        let tag = chars.next().ok_or(EnigmaError::UnsupportedRotorType(' '))?;
        let notches = chars.as_str();
        match tag {
            MOVING => Self::moving(name, permutation, notches),
            FIXED if notches.is_empty() => Ok(Self::fixed(name, permutation)),
            REFLECTOR if notches.is_empty() => Self::reflector(name, permutation),
            _ => Err(EnigmaError::UnsupportedRotorType(tag)),
        }
    }

    /// Rotor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant tag.
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }

    /// Wiring at position 0, ring 0.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Alphabet of the wiring.
    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }

    /// Size of the alphabet.
    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    /// True iff this rotor can step.
    pub fn rotates(&self) -> bool {
        matches!(self.kind, RotorKind::Moving { .. })
    }

    /// True iff this rotor is a reflector.
    pub fn reflecting(&self) -> bool {
        self.kind == RotorKind::Reflector
    }

    /// True iff the machine gave this rotor a pawl.
    pub fn has_pawl(&self) -> bool {
        self.pawl
    }

    /// Current position, as an alphabet index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current ring setting, as an alphabet index.
    pub fn ring_setting(&self) -> usize {
        self.ring
    }

    /// Sets the position to `index` modulo the alphabet size.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ReflectorImmovable`] when called on a
    /// reflector with a value other than its current position.
    pub fn set_position(&mut self, index: usize) -> Result<()> {
        let index = index % self.size();
        if self.reflecting() && index != self.position {
            return Err(EnigmaError::ReflectorImmovable(self.name.clone()));
        }
        self.position = index;
        Ok(())
    }

    /// Sets the position to the index of `symbol`.
    pub fn set_position_symbol(&mut self, symbol: char) -> Result<()> {
        let index = self.alphabet().to_index(symbol)?;
        self.set_position(index)
    }

    /// Sets the ring setting to `index` modulo the alphabet size.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ReflectorImmovable`] when called on a
    /// reflector with a value other than its current ring setting.
    pub fn set_ring_setting(&mut self, index: usize) -> Result<()> {
        let index = index % self.size();
        if self.reflecting() && index != self.ring {
            return Err(EnigmaError::ReflectorImmovable(self.name.clone()));
        }
        self.ring = index;
        Ok(())
    }

    /// Sets the ring setting to the index of `symbol`.
    pub fn set_ring_symbol(&mut self, symbol: char) -> Result<()> {
        let index = self.alphabet().to_index(symbol)?;
        self.set_ring_setting(index)
    }

    fn offset(&self) -> isize {
        (self.position + self.ring) as isize
    }

    /// Signal entering from the right at contact `p`, leaving on the left.
    pub fn convert_forward(&self, p: usize) -> usize {
        let offset = self.offset();
        let wired = self.permutation.permute(p as isize + offset);
        self.permutation.wrap(wired as isize - offset)
    }

    /// Signal entering from the left at contact `e`, leaving on the right.
    pub fn convert_backward(&self, e: usize) -> usize {
        let offset = self.offset();
        let wired = self.permutation.invert(e as isize + offset);
        self.permutation.wrap(wired as isize - offset)
    }

    /// True iff the rotor currently shows one of its notches.
    pub fn at_notch(&self) -> bool {
        match &self.kind {
            RotorKind::Moving { notches } => {
                let shown = self.permutation.wrap(self.offset());
                notches.contains(&shown)
            }
            _ => false,
        }
    }

    /// Moves one position forward. Does not touch neighbours.
    fn step(&mut self) {
        self.position = (self.position + 1) % self.size();
    }

    /// Clears the stack wiring and returns the rotor to position 0, ring 0.
    pub(crate) fn reset(&mut self) {
        self.position = 0;
        self.ring = 0;
        self.pawl = false;
        self.left = None;
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotor {}", self.name)
    }
}

/// The rotors currently loaded into a machine, indexed by [`SlotId`].
///
/// Left-neighbour links are slot indices into this arena, so reloading
/// the machine simply clears and refills it.
#[derive(Debug, Clone, Default)]
pub(crate) struct RotorArena {
    slots: Vec<Rotor>,
}

impl RotorArena {
    /// Creates an empty arena with room for `capacity` rotors.
    ///
    /// # Parameters
    /// - `capacity`: Number of slots to pre-allocate.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        RotorArena {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Loads a working copy of `rotor` into the next slot.
    ///
    /// The copy starts at position 0, ring 0, with no pawl and no left
    /// neighbour; the template is left untouched.
    ///
    /// # Parameters
    /// - `rotor`: Catalog template to copy.
    ///
    /// # Returns
    /// The [`SlotId`] of the filled slot.
    pub(crate) fn load(&mut self, rotor: &Rotor) -> SlotId {
        let id = SlotId(self.slots.len());
        let mut copy = rotor.clone();
        copy.reset();
        self.slots.push(copy);
        id
    }

    /// Empties every slot.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of populated slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the rotor in slot `id`.
    ///
    /// # Parameters
    /// - `id`: Slot of the rotor.
    ///
    /// # Panics
    /// Panics if `id` is not a populated slot.
    pub(crate) fn get(&self, id: SlotId) -> &Rotor {
        &self.slots[id.0]
    }

    /// Returns a mutable reference to the rotor in slot `id`.
    ///
    /// # Parameters
    /// - `id`: Slot of the rotor.
    ///
    /// # Panics
    /// Panics if `id` is not a populated slot.
    pub(crate) fn get_mut(&mut self, id: SlotId) -> &mut Rotor {
        &mut self.slots[id.0]
    }

    /// Iterates the loaded rotors from slot 0 rightwards.
    pub(crate) fn iter(&self) -> slice::Iter<'_, Rotor> {
        self.slots.iter()
    }

    /// Gives the rotor in `id` a pawl and links it to `left`.
    ///
    /// # Parameters
    /// - `id`: Slot receiving the pawl.
    /// - `left`: Slot to its left, or `None` for the leftmost rotor.
    pub(crate) fn fit_pawl(&mut self, id: SlotId, left: Option<SlotId>) {
        let rotor = &mut self.slots[id.0];
        rotor.pawl = true;
        rotor.left = left;
    }

    /// Left neighbour of `id`, if that neighbour can be driven by a pawl.
    fn driven_left(&self, id: SlotId) -> Option<SlotId> {
        self.slots[id.0]
            .left
            .filter(|left| self.slots[left.0].pawl)
    }

    /// Steps the rotor in `id`, cascading into its left neighbours.
    ///
    /// A rotor sitting at its notch kicks its left neighbour before moving.
    /// If it did not kick, a left neighbour that is itself at a notch is
    /// still caught by the pawl to its own left and moves again: the middle
    /// rotor double-step.
    ///
    /// Only pawl-bearing neighbours are ever driven. A rotor that does not
    /// rotate ignores the call.
    ///
    /// # Parameters
    /// - `id`: Slot whose pawl engages, normally the rightmost one.
    pub(crate) fn advance(&mut self, id: SlotId) {
        if !self.slots[id.0].rotates() {
            return;
        }
        let left = self.driven_left(id);
        let kicked = match left {
            Some(left) if self.slots[id.0].at_notch() => {
                self.advance(left);
                true
            }
            _ => false,
        };
        self.slots[id.0].step();

        if let (false, Some(left)) = (kicked, left) {
            if self.slots[left.0].at_notch() && self.driven_left(left).is_some() {
                self.advance(left);
            }
        }
    }
}
