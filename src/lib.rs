//! Rotor cipher machine simulator.
//!
//! Simulates an electromechanical rotor cipher: a stack of keyed
//! permutations ending in a reflector, a plugboard applied on the way in
//! and out, and a pawl-and-notch stepping mechanism that reproduces the
//! middle-rotor double-step.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (contiguous symbol run <-> indices)
//!     ↓
//! Permutation  (cycle notation, forward + inverse tables)
//!     ↓
//! Rotor        (reflector | fixed | moving; position, ring, notches)
//!     ↕ left-neighbour links by SlotId inside a RotorArena
//! Machine      (R slots + plugboard; stepping and signal path)
//! ```
//!
//! [`MachineConfig`] parses machine description text into an alphabet,
//! slot/pawl counts and a [`Catalog`] of rotors; [`Setting`] parses the
//! `*` lines that select and key the rotors; [`driver`] runs whole message
//! streams.
//!
//! # Examples
//!
//! Encipher and decipher with the naval machine:
//!
//! ```
//! use enigma::MachineConfig;
//!
//! let config = MachineConfig::naval().unwrap();
//! let mut machine = config.build_machine().unwrap();
//!
//! machine.setup("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)").unwrap();
//! let cipher = machine.convert_text("FROMHISSHOULDERHIAWATHA").unwrap();
//! assert_eq!(cipher, "QVPQSOKOILPUBKJZPISFXDW");
//!
//! machine.setup("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)").unwrap();
//! assert_eq!(machine.convert_text(&cipher).unwrap(), "FROMHISSHOULDERHIAWATHA");
//! ```
//!
//! Build a machine by hand:
//!
//! ```
//! use enigma::{Alphabet, Catalog, Machine, Permutation, Rotor};
//!
//! let alpha = Alphabet::new("ABCD").unwrap();
//! let catalog = Catalog::from_rotors([
//!     Rotor::reflector("R", Permutation::new("(AB) (CD)", alpha).unwrap()).unwrap(),
//!     Rotor::moving("M", Permutation::new("(ABC)", alpha).unwrap(), "D").unwrap(),
//! ])
//! .unwrap();
//!
//! let mut machine = Machine::new(alpha, 2, 1, catalog).unwrap();
//! machine.setup("* R M A").unwrap();
//! let index = machine.step_and_convert(0).unwrap();
//! assert!(index < 4);
//! assert_eq!(machine.positions(), "B");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod machine;
pub mod permutation;
pub mod rotor;
pub mod setting;
pub mod utils;

pub use alphabet::Alphabet;
pub use catalog::Catalog;
pub use config::MachineConfig;
pub use error::{EnigmaError, Result};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
pub use setting::Setting;
