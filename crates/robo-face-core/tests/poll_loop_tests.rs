//! Main loop behaviour of the device context.

mod common;

use common::{
    CountingDelay, FixedSensor, QueueNetwork, RecordingPwm, RecordingScreen, RecordingStrip,
    ScreenOp, face, get,
};
use embassy_futures::block_on;
use embassy_time::{Duration, Instant};
use robo_face_core::{
    BuzzerState, Command, RoboFace,
    config::{STANDALONE_BUZZER, WEB_BUZZER},
    presets::EYES_OPEN,
};

fn start() -> Instant {
    Instant::from_millis(5_000)
}

// -----------------------------------------------------------------------------
// Request handling
// -----------------------------------------------------------------------------

#[test]
fn wake_request_updates_everything_and_answers() {
    let mut face = face(WEB_BUZZER, Some(876));
    let mut network = QueueNetwork::with_requests(&[get("/robo_on")]);

    block_on(face.poll(&mut network, start()));

    assert_eq!(network.responses.len(), 1);
    let celsius = network.responses[0].temperature().unwrap();
    assert_eq!(format!("{celsius:.2}"), "27.14");

    assert_eq!(face.matrix().strip().frames.len(), 1);
    assert_eq!(face.matrix().pixels()[16], EYES_OPEN[1][1]);
    assert_eq!(face.buzzer().pwm().levels, vec![1024]);
    assert_eq!(face.next_toggle(), Some(start() + Duration::from_millis(500)));
    assert_eq!(face.screen().texts(), vec!["Bip Bip Bip"]);
    assert!(!face.captions().is_pending());
}

#[test]
fn unknown_path_only_serves_the_page() {
    let mut face = face(WEB_BUZZER, Some(876));
    let mut network = QueueNetwork::with_requests(&[get("/")]);

    block_on(face.poll(&mut network, start()));

    assert_eq!(network.responses.len(), 1);
    assert!(face.matrix().strip().frames.is_empty());
    assert!(face.buzzer().pwm().levels.is_empty());
    assert!(face.screen().ops.is_empty());
}

#[test]
fn requests_in_one_iteration_keep_the_last_caption() {
    let mut face = face(WEB_BUZZER, Some(876));
    let mut network = QueueNetwork::with_requests(&[get("/robo_on"), get("/robo_off")]);

    block_on(face.poll(&mut network, start()));

    assert_eq!(network.responses.len(), 2);
    assert_eq!(face.matrix().strip().frames.len(), 2);
    assert_eq!(face.buzzer().pwm().levels, vec![1024, 0]);
    assert_eq!(face.buzzer_state(), BuzzerState::default());
    assert_eq!(face.next_toggle(), None);
    assert_eq!(face.screen().texts(), vec!["ZzZ ZzZ ZzZ"]);
}

#[test]
fn lights_off_blanks_and_silences() {
    let mut face = face(WEB_BUZZER, Some(876));
    block_on(face.apply(Command::Wake, start()));

    let mut network = QueueNetwork::with_requests(&[get("/matriz_off?")]);
    block_on(face.poll(&mut network, start()));

    let frames = &face.matrix().strip().frames;
    assert!(frames.last().unwrap().iter().all(|b| *b == 0));
    assert_eq!(face.buzzer().pwm().last(), Some(0));
    assert_eq!(
        face.screen().ops,
        vec![
            ScreenOp::Clear,
            ScreenOp::Text(64, 25, String::new()),
            ScreenOp::Flush,
        ]
    );
}

#[test]
fn failed_sensor_serves_placeholder() {
    let mut face = face(WEB_BUZZER, None);

    let response = block_on(face.handle(&get("/"), start()));

    assert_eq!(response.temperature(), None);
    assert!(response.render().unwrap().contains("-- &deg;C"));
}

#[test]
fn broken_strip_does_not_block_the_rest() {
    let strip = RecordingStrip {
        fail: true,
        ..RecordingStrip::default()
    };
    let mut face = RoboFace::new(
        strip,
        CountingDelay::default(),
        RecordingPwm::default(),
        RecordingScreen::default(),
        FixedSensor(Some(876)),
        WEB_BUZZER,
    );

    let response = block_on(face.handle(&get("/robo_on"), start()));
    face.refresh(start());

    assert!(response.temperature().is_some());
    assert!(face.buzzer_state().active);
    assert_eq!(face.screen().texts(), vec!["Bip Bip Bip"]);
}

#[test]
fn broken_display_drops_the_caption() {
    let screen = RecordingScreen {
        fail: true,
        ..RecordingScreen::default()
    };
    let mut face = RoboFace::new(
        RecordingStrip::default(),
        CountingDelay::default(),
        RecordingPwm::default(),
        screen,
        FixedSensor(Some(876)),
        WEB_BUZZER,
    );

    block_on(face.apply(Command::Wake, start()));

    assert!(!face.drain_display());
    assert!(!face.captions().is_pending());
}

// -----------------------------------------------------------------------------
// Timers
// -----------------------------------------------------------------------------

#[test]
fn idle_iterations_keep_the_beep_going() {
    let mut face = face(WEB_BUZZER, Some(876));
    let mut network = QueueNetwork::default();
    block_on(face.apply(Command::Wake, start()));

    let mut now = start();
    for _ in 0..100 {
        now += Duration::from_millis(10);
        block_on(face.poll(&mut network, now));
    }

    // one second of 10 ms slices: two toggles
    assert_eq!(face.buzzer().pwm().levels, vec![1024, 0, 1024]);
    assert!(network.responses.is_empty());
}

#[test]
fn tick_before_deadline_does_nothing() {
    let mut face = face(WEB_BUZZER, Some(876));
    block_on(face.apply(Command::Wake, start()));

    face.tick(start() + Duration::from_millis(499));

    assert_eq!(face.buzzer().pwm().levels, vec![1024]);
    assert!(face.buzzer_state().level);
}

#[test]
fn late_tick_toggles_once() {
    let mut face = face(WEB_BUZZER, Some(876));
    block_on(face.apply(Command::Wake, start()));

    face.tick(start() + Duration::from_millis(2_000));

    assert_eq!(face.buzzer().pwm().levels, vec![1024, 0]);
    assert_eq!(
        face.next_toggle(),
        Some(start() + Duration::from_millis(2_500))
    );
}

#[test]
fn standalone_tone_is_steady() {
    let mut face = face(STANDALONE_BUZZER, Some(876));
    block_on(face.apply(Command::Wake, start()));

    face.tick(start() + Duration::from_secs(10));

    assert_eq!(face.buzzer().pwm().levels, vec![2048]);
    assert_eq!(face.next_toggle(), None);
}

#[test]
fn button_blank_keeps_the_tone() {
    let mut face = face(STANDALONE_BUZZER, Some(876));
    block_on(face.apply(Command::Wake, start()));
    face.drain_display();

    block_on(face.apply(Command::Blank, start() + Duration::from_millis(10)));
    face.drain_display();

    let frames = &face.matrix().strip().frames;
    assert_eq!(frames.len(), 2);
    assert!(frames[1].iter().all(|b| *b == 0));
    assert_eq!(face.buzzer().pwm().levels, vec![2048]);
    assert!(face.buzzer_state().active);
    assert_eq!(face.screen().texts().last().copied(), Some(" "));
}

#[test]
fn blank_pushes_a_dark_frame() {
    let mut face = face(WEB_BUZZER, Some(876));

    block_on(face.blank());

    let frames = &face.matrix().strip().frames;
    assert_eq!(frames.len(), 1);
    assert!(frames[0].iter().all(|b| *b == 0));
    assert_eq!(face.matrix().delay().waits_ns, vec![100_000]);
}
