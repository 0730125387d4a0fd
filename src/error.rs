//! Error types for the enigma library.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;

/// Errors produced while building, configuring or running a machine.
///
/// Every variant renders a descriptive message. Nothing is retried; an
/// error aborts the current operation and is handed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Alphabet text was empty.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    /// Alphabet text was not an ascending contiguous run.
    #[error("alphabet symbol '{symbol}' at index {index} breaks the contiguous run starting at '{first}'")]
    NonContiguousAlphabet {
        symbol: char,
        index: usize,
        first: char,
    },
    /// A symbol outside the alphabet was looked up.
    #[error("symbol '{0}' is not in the alphabet")]
    SymbolOutOfRange(char),
    /// An index outside `[0, size)` was looked up.
    #[error("index {index} is outside the alphabet range [0, {size})")]
    IndexOutOfRange { index: usize, size: usize },
    /// Cycle notation could not be parsed.
    #[error("malformed permutation cycles: {0}")]
    MalformedCycles(String),
    /// Slot or pawl counts are inconsistent.
    #[error("invalid machine geometry: {num_rotors} rotor slots with {num_pawls} pawls")]
    InvalidGeometry { num_rotors: usize, num_pawls: usize },
    /// A rotor type tag other than `M`, `N` or `R`.
    #[error("rotor type '{0}' is not supported")]
    UnsupportedRotorType(char),
    /// A reflector wiring maps some symbol to itself.
    #[error("reflector {0} maps a symbol to itself")]
    ReflectorNotDerangement(String),
    /// A rotor definition was built on a different alphabet.
    #[error("rotor {name} is wired for alphabet {found}, machine expects {expected}")]
    AlphabetMismatch {
        name: String,
        expected: String,
        found: String,
    },
    /// Reflector position or ring was asked to move.
    #[error("reflector {0} cannot be repositioned")]
    ReflectorImmovable(String),
    /// A setting line did not start with `*`.
    #[error("setting line must start with '*': {0}")]
    MissingSettingMarker(String),
    /// A setting line named fewer rotors than slots.
    #[error("machine has {expected} rotor slots, but setting names only {found}")]
    TooFewRotors { expected: usize, found: usize },
    /// A setting line carried tokens past the ring settings.
    #[error("unexpected token '{0}' in setting line")]
    UnexpectedSettingToken(String),
    /// A setting line named a rotor the catalog does not define.
    #[error("rotor {0} is not in the catalog")]
    UnknownRotor(String),
    /// Slot 0 was filled with a non-reflector.
    #[error("leftmost rotor {0} is not a reflector")]
    FirstRotorNotReflector(String),
    /// A reflector was placed anywhere but slot 0.
    #[error("reflector {name} cannot occupy slot {slot}")]
    MisplacedReflector { name: String, slot: usize },
    /// Positions or ring settings not one symbol per non-reflector slot.
    #[error("{what} needs {expected} symbols, got \"{found}\"")]
    BadSettingLength {
        what: &'static str,
        expected: usize,
        found: String,
    },
    /// Conversion attempted before `setup` populated every slot.
    #[error("machine has {populated} of {expected} rotor slots populated")]
    NotConfigured { expected: usize, populated: usize },
    /// The machine description text ended early.
    #[error("configuration truncated: {0}")]
    ConfigTruncated(&'static str),
    /// A line of the machine description could not be understood.
    #[error("bad configuration at line {line}: {reason}")]
    BadConfig { line: usize, reason: String },
    /// The same rotor name was defined twice in a catalog.
    #[error("rotor {0} is defined more than once")]
    DuplicateRotor(String),
    /// Message text arrived before any setting line.
    #[error("message at line {0} precedes any setting line")]
    MessageBeforeSetting(usize),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EnigmaError {
    fn from(err: std::io::Error) -> Self {
        EnigmaError::Io(err.to_string())
    }
}
