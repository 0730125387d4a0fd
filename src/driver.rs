//! Driver: runs a stream of setting lines and messages through a machine.
//!
//! Lines starting with `*` reconfigure the machine. Every other line is a
//! message: its whitespace is dropped, the rest is converted, and the
//! result is written in groups of five.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::MachineConfig;
use crate::error::{EnigmaError, Result};
use crate::setting::SETTING_MARKER;
use crate::utils::groups::{format_groups, GROUP_WIDTH};

/// Processes every line of `input`, writing converted messages to `output`.
///
/// Blank lines produce blank output lines. The machine state carries over
/// from one message line to the next until the next setting line.
///
/// # Errors
/// - [`EnigmaError::MessageBeforeSetting`] for a message ahead of the first
///   setting line.
/// - [`EnigmaError::Io`] when reading or writing fails.
/// - Any configuration or conversion error of the machine.
///
/// # Examples
///
/// ```
/// use enigma::{driver, MachineConfig};
///
/// let config = MachineConfig::naval().unwrap();
/// let input = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\nFROM HIS SHOULDER\n";
/// let mut output = Vec::new();
/// driver::process(&config, input.as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "QVPQS OKOIL PUBKJ\n");
/// ```
pub fn process<R, W>(config: &MachineConfig, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut machine = config.build_machine()?;
    let mut messages = 0usize;

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.starts_with(SETTING_MARKER) {
            machine.setup(line)?;
            continue;
        }
        if !line.is_empty() && !machine.is_configured() {
            return Err(EnigmaError::MessageBeforeSetting(number + 1));
        }
        let message: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        let converted = machine.convert_text(&message)?;
        writeln!(output, "{}", format_groups(&converted, GROUP_WIDTH))?;
        messages += 1;
    }
    output.flush()?;

    debug!(messages, "input processed");
    Ok(())
}
