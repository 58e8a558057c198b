//! Button edges of the standalone board.

use robo_face_core::{ButtonPanel, Command};

#[test]
fn pressing_a_wakes() {
    let mut panel = ButtonPanel::new();

    assert_eq!(panel.sample(true, false).as_slice(), &[Command::Wake]);
}

#[test]
fn holding_a_fires_once() {
    let mut panel = ButtonPanel::new();
    panel.sample(true, false);

    assert!(panel.sample(true, false).is_empty());
    assert!(panel.sample(true, false).is_empty());
}

#[test]
fn releasing_a_sleeps() {
    let mut panel = ButtonPanel::new();
    panel.sample(true, false);

    assert_eq!(panel.sample(false, false).as_slice(), &[Command::Sleep]);
}

#[test]
fn idle_panel_is_silent() {
    let mut panel = ButtonPanel::default();

    assert!(panel.sample(false, false).is_empty());
}

#[test]
fn b_blanks_on_press_only() {
    let mut panel = ButtonPanel::new();

    assert_eq!(panel.sample(false, true).as_slice(), &[Command::Blank]);
    assert!(panel.sample(false, true).is_empty());
    assert!(panel.sample(false, false).is_empty());
    assert_eq!(panel.sample(false, true).as_slice(), &[Command::Blank]);
}

#[test]
fn a_is_reported_before_b() {
    let mut panel = ButtonPanel::new();

    assert_eq!(
        panel.sample(true, true).as_slice(),
        &[Command::Wake, Command::Blank]
    );
    assert_eq!(
        panel.sample(false, false).as_slice(),
        &[Command::Sleep]
    );
}
