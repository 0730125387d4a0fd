//! Regression tests for the stepping mechanism and the signal path.
//!
//! Expected positions and ciphertexts are frozen fixtures: any change in
//! output means the stepping or wiring math changed.
//!
//! Coverage:
//! - single-step cascade and middle-rotor double-step on the naval machine
//! - the full 19-step odometer sequence of a 3-symbol machine
//! - pawl gating: a rotor without a pawl is never driven
//! - known-answer ciphertexts with and without ring settings
//! - `step_and_convert` and `convert_text` error paths

use enigma::{Alphabet, Catalog, EnigmaError, Machine, MachineConfig, Permutation, Rotor};

fn naval() -> Machine {
    MachineConfig::naval().unwrap().build_machine().unwrap()
}

/// Steps `machine` once per entry of `expected`, checking positions after
/// each step.
fn check_advance(machine: &mut Machine, expected: &[&str]) {
    for (step, &want) in expected.iter().enumerate() {
        machine.step_and_convert(0).unwrap();
        assert_eq!(
            machine.positions(),
            want,
            "wrong positions after step {}",
            step + 1
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Naval machine: cascade and double-step
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn right_rotor_at_notch_kicks_middle() {
    let mut m = naval();
    m.setup("* B Beta I II III AAAV AAAA (AQ) (EP)").unwrap();
    check_advance(&mut m, &["AABW"]);
}

#[test]
fn ring_setting_moves_notch() {
    let mut m = naval();
    m.setup("* B Beta I II III AAAU AAAB (AQ) (EP)").unwrap();
    check_advance(&mut m, &["AABV"]);
}

#[test]
fn middle_rotor_double_steps() {
    let mut m = naval();
    m.setup("* B Beta I II III AADV AAAA (AQ) (EP)").unwrap();
    check_advance(&mut m, &["AAEW", "ABFX"]);
}

#[test]
fn double_step_carries_left_rotor_from_its_notch() {
    let mut m = naval();
    m.setup("* B Beta I II III AQDV AAAA (AQ) (EP)").unwrap();
    check_advance(&mut m, &["AQEW", "ARFX", "ARFY"]);
}

#[test]
fn middle_kick_below_notch() {
    let mut m = naval();
    m.setup("* B Beta I II III APDV AAAA (AQ) (EP)").unwrap();
    check_advance(&mut m, &["APEW"]);

    m.setup("* B Beta I II III AQFV AAAA (AQ) (EP)").unwrap();
    check_advance(&mut m, &["AQGW"]);

    m.setup("* B Beta I II III AQDV AAAA (AQ) (EP)").unwrap();
    check_advance(&mut m, &["AQEW"]);
}

#[test]
fn fixed_rotor_never_moves() {
    let mut m = naval();
    m.setup("* B Beta I II III AZZZ").unwrap();
    for _ in 0..(26 * 26 * 2) {
        m.step_and_convert(0).unwrap();
        assert_eq!(&m.positions()[..1], "A");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Pawl gating
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn double_step_needs_pawl_on_the_left() {
    // Two pawls: II cannot double-step because Beta has no pawl.
    let config = MachineConfig::naval().unwrap();
    let mut m = Machine::new(config.alphabet, 4, 2, config.catalog.clone()).unwrap();
    m.setup("* B Beta II III ADU").unwrap();
    check_advance(&mut m, &["ADV", "AEW", "AEX"]);

    // Three pawls: the same positions double-step into I.
    let mut m = Machine::new(config.alphabet, 4, 3, config.catalog).unwrap();
    m.setup("* B I II III ADU").unwrap();
    check_advance(&mut m, &["ADV", "AEW", "BFX"]);
}

#[test]
fn rotor_without_pawl_is_not_cascaded_into() {
    // One pawl: only the rightmost rotor moves, even through its notch.
    let config = MachineConfig::naval().unwrap();
    let mut m = Machine::new(config.alphabet, 4, 1, config.catalog).unwrap();
    m.setup("* B I II III AEU").unwrap();
    check_advance(&mut m, &["AEV", "AEW", "AEX"]);
}

#[test]
fn leftmost_pawl_is_not_driven_by_reflector() {
    // Every non-reflector slot has a pawl; I sits at its notch but its
    // left neighbour is the reflector, which never moves.
    let config = MachineConfig::naval().unwrap();
    let mut m = Machine::new(config.alphabet, 4, 3, config.catalog).unwrap();
    m.setup("* B I II III QEV").unwrap();
    check_advance(&mut m, &["RFW", "RFX"]);
    assert_eq!(m.rotor(1).map(|r| r.has_pawl()), Some(true));
}

#[test]
fn rightmost_rotor_steps_without_pawl() {
    let config = MachineConfig::naval().unwrap();
    let mut m = Machine::new(config.alphabet, 2, 0, config.catalog).unwrap();
    m.setup("* B III V").unwrap();
    assert_eq!(m.rotor(1).map(|r| r.has_pawl()), Some(false));
    check_advance(&mut m, &["W", "X"]);
}

#[test]
fn repeated_rotor_fills_independent_slots() {
    let mut m = naval();
    m.setup("* B Beta I I I AAAZ").unwrap();
    assert_eq!(m.rotor_names(), vec!["B", "Beta", "I", "I", "I"]);
    check_advance(&mut m, &["AAAA"]);
    m.setup("* B Beta I I I AAAQ").unwrap();
    check_advance(&mut m, &["AABR"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Three-symbol odometer
// ═══════════════════════════════════════════════════════════════════════

fn simple_machine() -> Machine {
    let alpha = Alphabet::new("ABC").unwrap();
    let perm = |cycles: &str| Permutation::new(cycles, alpha).unwrap();
    let catalog = Catalog::from_rotors([
        Rotor::moving("I", perm("(ACB)"), "C").unwrap(),
        Rotor::moving("II", perm("(BC)"), "C").unwrap(),
        Rotor::moving("III", perm("(AB)"), "C").unwrap(),
        Rotor::fixed("Beta", perm("(ABC)")),
        Rotor::reflector("B", perm("(ABC)")).unwrap(),
    ])
    .unwrap();
    Machine::new(alpha, 5, 3, catalog).unwrap()
}

#[test]
fn three_symbol_stepping_sequence() {
    let mut m = simple_machine();
    m.setup("*B Beta I II III AAAA").unwrap();
    let mut seen = Vec::with_capacity(19);
    for _ in 0..19 {
        m.step_and_convert(0).unwrap();
        seen.push(m.positions());
    }
    assert_eq!(
        seen.join(" "),
        "AAAB AAAC AABA AABB AABC AACA ABAB ABAC ABBA ABBB \
         ABBC ABCA ACAB ACAC ACBA ACBB ACBC ACCA AAAB"
    );
}

#[test]
fn three_symbol_ciphertext() {
    let mut m = simple_machine();
    m.setup("*B Beta I II III AAAA").unwrap();
    assert_eq!(m.convert_text("ABCABCAAB").unwrap(), "BCABCABBC");
}

// ═══════════════════════════════════════════════════════════════════════
// Known answers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn hiawatha_known_answer() {
    let mut m = naval();
    m.setup("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)").unwrap();
    assert_eq!(
        m.convert_text("FROMHISSHOULDERHIAWATHA").unwrap(),
        "QVPQSOKOILPUBKJZPISFXDW"
    );
}

#[test]
fn ring_settings_known_answer() {
    let mut m = naval();
    m.setup("* B Beta I II III AAAA BCDE (AQ) (EP)").unwrap();
    assert_eq!(m.convert_text("HELLOWORLD").unwrap(), "ICZEJMZTZC");
    assert_eq!(m.positions(), "AAAK");
}

#[test]
fn triple_notch_rotors_known_answer() {
    let mut m = naval();
    m.setup("* C Gamma VI VII VIII ZZZZ (AB) (CD) (EF)").unwrap();
    assert_eq!(m.convert_text("ATTACKATDAWN").unwrap(), "ZAWCKRXVUYZO");
    assert_eq!(m.positions(), "ZAAL");
}

#[test]
fn decipher_restores_plaintext_with_rings() {
    let setting = "* C Gamma V I VIII QRST MNOP (AZ) (BY) (CX)";
    let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
    let mut m = naval();
    m.setup(setting).unwrap();
    let cipher = m.convert_text(plain).unwrap();
    assert_ne!(cipher, plain);
    m.setup(setting).unwrap();
    assert_eq!(m.convert_text(&cipher).unwrap(), plain);
}

// ═══════════════════════════════════════════════════════════════════════
// Error paths
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn step_before_setup_is_rejected() {
    let mut m = naval();
    assert_eq!(
        m.step_and_convert(3),
        Err(EnigmaError::NotConfigured {
            expected: 5,
            populated: 0
        })
    );
    assert!(m.convert_text("A").is_err());
    // Nothing to convert, nothing to reject.
    assert_eq!(m.convert_text("123").unwrap(), "123");
}

#[test]
fn step_with_out_of_range_index_is_rejected() {
    let mut m = naval();
    m.setup("* B Beta I II III AAAA").unwrap();
    assert!(matches!(
        m.step_and_convert(100),
        Err(EnigmaError::IndexOutOfRange { index: 100, size: 26 })
    ));
}

#[test]
fn accessors_report_geometry() {
    let m = naval();
    assert_eq!(m.num_rotors(), 5);
    assert_eq!(m.num_pawls(), 3);
    assert_eq!(m.alphabet().size(), 26);
    assert_eq!(m.positions(), "");
}
