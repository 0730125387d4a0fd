//! Machine: rotor stack, plugboard and stepping mechanism.
//!
//! Orchestrates R rotor slots (slot 0 is the reflector) and a plugboard.
//! Each in-alphabet character first steps the rightmost rotor, which may
//! cascade leftwards through the pawl-bearing slots, and then travels
//! plugboard, rotors right to left, reflector, rotors left to right,
//! plugboard.

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::catalog::Catalog;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;
use crate::rotor::{Rotor, RotorArena, SlotId};
use crate::setting::Setting;

/// A rotor cipher machine.
///
/// # Examples
///
/// ```
/// use enigma::MachineConfig;
///
/// let config = MachineConfig::naval().unwrap();
/// let mut machine = config.build_machine().unwrap();
/// machine.setup("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)").unwrap();
/// let cipher = machine.convert_text("FROMHISSHOULDER").unwrap();
///
/// machine.setup("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)").unwrap();
/// assert_eq!(machine.convert_text(&cipher).unwrap(), "FROMHISSHOULDER");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    num_pawls: usize,
    catalog: Catalog,
    slots: RotorArena,
    plugboard: Permutation,
}

impl Machine {
    /// Creates an unconfigured machine with `num_rotors` slots, of which
    /// the `num_pawls` rightmost carry pawls, drawing rotors from `catalog`.
    ///
    /// # Parameters
    /// - `alphabet`: Symbols the machine converts.
    /// - `num_rotors`: Total slot count R, reflector included.
    /// - `num_pawls`: Pawl count P.
    /// - `catalog`: Rotor templates available to [`setup`](Self::setup).
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidGeometry`] unless `num_rotors >= 2` and
    ///   `num_pawls < num_rotors`.
    /// - [`EnigmaError::AlphabetMismatch`] if a catalog rotor is wired for a
    ///   different alphabet.
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        num_pawls: usize,
        catalog: Catalog,
    ) -> Result<Self> {
        if num_rotors < 2 || num_pawls >= num_rotors {
            return Err(EnigmaError::InvalidGeometry {
                num_rotors,
                num_pawls,
            });
        }
        if let Some(rotor) = catalog.iter().find(|r| *r.alphabet() != alphabet) {
            return Err(EnigmaError::AlphabetMismatch {
                name: rotor.name().to_string(),
                expected: alphabet.to_string(),
                found: rotor.alphabet().to_string(),
            });
        }
        Ok(Machine {
            alphabet,
            num_rotors,
            num_pawls,
            catalog,
            slots: RotorArena::with_capacity(num_rotors),
            plugboard: Permutation::identity(alphabet),
        })
    }

    /// Number of rotor slots, reflector included.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Number of pawls, i.e. slots the stepping mechanism can move.
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// The machine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Rotor definitions available to [`setup`](Self::setup).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current plugboard.
    pub fn plugboard(&self) -> &Permutation {
        &self.plugboard
    }

    /// True once every slot holds a rotor.
    pub fn is_configured(&self) -> bool {
        self.slots.len() == self.num_rotors
    }

    /// Rotor loaded in `slot`, if any.
    ///
    /// # Returns
    /// `None` when `slot` is past the last populated slot.
    pub fn rotor(&self, slot: usize) -> Option<&Rotor> {
        (slot < self.slots.len()).then(|| self.slots.get(SlotId(slot)))
    }

    /// Names of the loaded rotors, slot 0 first.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.slots.iter().map(Rotor::name).collect()
    }

    /// Positions of the non-reflector rotors, leftmost first.
    pub fn positions(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .filter_map(|r| self.alphabet.to_symbol(r.position()).ok())
            .collect()
    }

    /// Ring settings of the non-reflector rotors, leftmost first.
    pub fn ring_settings(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .filter_map(|r| self.alphabet.to_symbol(r.ring_setting()).ok())
            .collect()
    }

    /// Configures the machine from a setting line.
    ///
    /// Replaces the rotors, positions, ring settings, pawl wiring and
    /// plugboard. On error the machine is left unconfigured.
    ///
    /// # Parameters
    /// - `line`: Setting line such as `* B Beta III IV I AXLE (HQ) (EX)`.
    ///
    /// # Errors
    /// Any error of [`Setting::parse`] or [`apply`](Self::apply).
    pub fn setup(&mut self, line: &str) -> Result<()> {
        let setting = Setting::parse(line, self.num_rotors);
        match setting {
            Ok(setting) => self.apply(&setting),
            Err(err) => {
                self.slots.clear();
                Err(err)
            }
        }
    }

    /// Configures the machine from an already parsed [`Setting`].
    ///
    /// # Parameters
    /// - `setting`: Rotor names, positions, optional rings and plugboard.
    ///
    /// # Errors
    /// - [`EnigmaError::TooFewRotors`] if `setting` names fewer rotors than slots.
    /// - [`EnigmaError::UnknownRotor`] for a name missing from the catalog.
    /// - [`EnigmaError::FirstRotorNotReflector`] if slot 0 is not a reflector.
    /// - [`EnigmaError::MisplacedReflector`] if a reflector sits in another slot.
    /// - [`EnigmaError::BadSettingLength`] unless positions (and rings, when
    ///   given) have one symbol per non-reflector slot.
    /// - [`EnigmaError::SymbolOutOfRange`] for symbols outside the alphabet.
    /// - Any plugboard parse error.
    pub fn apply(&mut self, setting: &Setting) -> Result<()> {
        let result = self.try_apply(setting);
        if result.is_err() {
            self.slots.clear();
        }
        result
    }

    fn try_apply(&mut self, setting: &Setting) -> Result<()> {
        self.slots.clear();
        if setting.rotors.len() < self.num_rotors {
            return Err(EnigmaError::TooFewRotors {
                expected: self.num_rotors,
                found: setting.rotors.len(),
            });
        }

        for (slot, name) in setting.rotors.iter().take(self.num_rotors).enumerate() {
            let rotor = self
                .catalog
                .get(name)
                .ok_or_else(|| EnigmaError::UnknownRotor(name.clone()))?;
            if slot == 0 && !rotor.reflecting() {
                return Err(EnigmaError::FirstRotorNotReflector(name.clone()));
            }
            if slot > 0 && rotor.reflecting() {
                return Err(EnigmaError::MisplacedReflector {
                    name: name.clone(),
                    slot,
                });
            }
            self.slots.load(rotor);
        }

        for slot in (self.num_rotors - self.num_pawls)..self.num_rotors {
            self.slots.fit_pawl(SlotId(slot), Some(SlotId(slot - 1)));
        }

        let positions = self.slot_symbols("positions", &setting.positions)?;
        for (slot, symbol) in positions.into_iter().enumerate() {
            self.slots.get_mut(SlotId(slot + 1)).set_position_symbol(symbol)?;
        }
        if let Some(rings) = &setting.rings {
            let rings = self.slot_symbols("ring settings", rings)?;
            for (slot, symbol) in rings.into_iter().enumerate() {
                self.slots.get_mut(SlotId(slot + 1)).set_ring_symbol(symbol)?;
            }
        }

        self.plugboard = Permutation::new(&setting.plugboard, self.alphabet)?;

        debug!(
            rotors = ?self.rotor_names(),
            positions = %self.positions(),
            rings = %self.ring_settings(),
            plugboard = %setting.plugboard,
            "machine configured"
        );
        Ok(())
    }

    /// Splits `text` into exactly one symbol per non-reflector slot.
    fn slot_symbols(&self, what: &'static str, text: &str) -> Result<Vec<char>> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != self.num_rotors - 1 {
            return Err(EnigmaError::BadSettingLength {
                what,
                expected: self.num_rotors - 1,
                found: text.to_string(),
            });
        }
        Ok(symbols)
    }

    /// Steps the rotors, then enciphers alphabet index `index`.
    ///
    /// # Parameters
    /// - `index`: Alphabet index of the input symbol.
    ///
    /// # Returns
    /// Alphabet index of the output symbol.
    ///
    /// # Errors
    /// - [`EnigmaError::NotConfigured`] before a successful setup.
    /// - [`EnigmaError::IndexOutOfRange`] unless `index < alphabet size`.
    pub fn step_and_convert(&mut self, index: usize) -> Result<usize> {
        if !self.is_configured() {
            return Err(EnigmaError::NotConfigured {
                expected: self.num_rotors,
                populated: self.slots.len(),
            });
        }
        if index >= self.alphabet.size() {
            return Err(EnigmaError::IndexOutOfRange {
                index,
                size: self.alphabet.size(),
            });
        }

        self.slots.advance(SlotId(self.num_rotors - 1));

        let mut signal = self.plugboard.permute(index as isize);
        for rotor in self.slots.iter().skip(1).rev() {
            signal = rotor.convert_forward(signal);
        }
        signal = self.slots.get(SlotId(0)).convert_forward(signal);
        for rotor in self.slots.iter().skip(1) {
            signal = rotor.convert_backward(signal);
        }
        let output = self.plugboard.invert(signal as isize);

        trace!(input = index, output, positions = %self.positions(), "converted");
        Ok(output)
    }

    /// Enciphers `text`, carrying rotor state across the whole call.
    ///
    /// Symbols outside the alphabet are copied through and do not step
    /// the rotors.
    ///
    /// # Parameters
    /// - `text`: Message to convert.
    ///
    /// # Returns
    /// The converted message, symbol for symbol.
    ///
    /// # Errors
    /// Any error of [`step_and_convert`](Self::step_and_convert).
    pub fn convert_text(&mut self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        for symbol in text.chars() {
            if !self.alphabet.contains(symbol) {
                result.push(symbol);
                continue;
            }
            let index = self.alphabet.to_index(symbol)?;
            let converted = self.step_and_convert(index)?;
            result.push(self.alphabet.to_symbol(converted)?);
        }
        Ok(result)
    }
}
