// Integration tests for the playback state machine

use algotrace::algorithms::catalog::AlgorithmKind;
use algotrace::algorithms::trace;
use algotrace::playback::{ManualClock, PlaybackController, PlaybackError, PlaybackState};
use algotrace::snapshot::StepSequence;

fn controller(interval_ms: u64) -> (PlaybackController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut ctl = PlaybackController::with_clock(clock.clone());
    ctl.set_speed(interval_ms);
    (ctl, clock)
}

fn bubble() -> StepSequence {
    trace(AlgorithmKind::Bubble, &[3, 1, 2], None).expect("Tracing failed")
}

#[test]
fn test_load_rewinds_and_pauses() {
    let (mut ctl, _) = controller(100);
    assert_eq!(ctl.state(), PlaybackState::Idle);

    ctl.load(bubble());
    assert_eq!(ctl.position(), (0, PlaybackState::Paused));
    assert!(ctl.current_step().is_some());
}

#[test]
fn test_pause_before_first_tick_keeps_index() {
    let (mut ctl, clock) = controller(500);
    ctl.load(bubble());

    ctl.play().expect("Play failed");
    clock.advance_ms(200);
    ctl.poll();
    ctl.pause();

    clock.advance_ms(5_000);
    assert_eq!(ctl.poll(), 0);
    assert_eq!(ctl.position(), (0, PlaybackState::Paused));
    assert_eq!(ctl.next_deadline(), None);
}

#[test]
fn test_ticks_advance_one_step_per_interval() {
    let (mut ctl, clock) = controller(100);
    ctl.load(bubble());
    ctl.play().expect("Play failed");

    clock.advance_ms(99);
    assert_eq!(ctl.poll(), 0);
    assert_eq!(ctl.current_index(), 0);

    clock.advance_ms(1);
    assert_eq!(ctl.poll(), 1);
    assert_eq!(ctl.current_index(), 1);

    // a late poll catches up on every missed tick
    clock.advance_ms(200);
    assert_eq!(ctl.poll(), 2);
    assert_eq!(ctl.current_index(), 3);
}

#[test]
fn test_playing_to_the_end_completes() {
    let (mut ctl, clock) = controller(10);
    let seq = bubble();
    let last = seq.last_index();
    ctl.load(seq);
    ctl.play().expect("Play failed");

    clock.advance_ms(10 * (last as u64 + 5));
    ctl.poll();

    assert_eq!(ctl.position(), (last, PlaybackState::Complete));
    assert_eq!(ctl.next_deadline(), None);

    // nothing left to play
    ctl.play().expect("Play failed");
    assert_eq!(ctl.state(), PlaybackState::Complete);
}

#[test]
fn test_reset_returns_to_start() {
    let (mut ctl, clock) = controller(10);
    ctl.load(bubble());
    ctl.play().expect("Play failed");
    clock.advance_ms(30);
    ctl.poll();

    ctl.reset().expect("Reset failed");
    assert_eq!(ctl.position(), (0, PlaybackState::Paused));
    assert_eq!(ctl.next_deadline(), None);

    clock.advance_ms(1_000);
    assert_eq!(ctl.poll(), 0);
    assert_eq!(ctl.current_index(), 0);
}

#[test]
fn test_manual_stepping() {
    let (mut ctl, _) = controller(100);
    let seq = bubble();
    let last = seq.last_index();
    ctl.load(seq);

    assert_eq!(ctl.step_backward(), Ok(false));
    assert_eq!(ctl.step_forward(), Ok(true));
    assert_eq!(ctl.current_index(), 1);
    assert_eq!(ctl.step_backward(), Ok(true));
    assert_eq!(ctl.current_index(), 0);

    for _ in 0..last {
        assert_eq!(ctl.step_forward(), Ok(true));
    }
    assert_eq!(ctl.position(), (last, PlaybackState::Complete));

    // already at the end
    assert_eq!(ctl.step_forward(), Ok(false));
    assert_eq!(ctl.current_index(), last);
}

#[test]
fn test_step_forward_while_playing_is_ignored() {
    let (mut ctl, _) = controller(100);
    ctl.load(bubble());
    ctl.play().expect("Play failed");

    assert_eq!(ctl.step_forward(), Ok(false));
    assert_eq!(ctl.position(), (0, PlaybackState::Playing));
}

#[test]
fn test_jump_to_end_then_back() {
    let (mut ctl, _) = controller(100);
    let seq = bubble();
    let last = seq.last_index();
    ctl.load(seq);

    assert_eq!(ctl.jump_to_end(), Ok(true));
    assert_eq!(ctl.position(), (last, PlaybackState::Complete));
    assert_eq!(ctl.jump_to_end(), Ok(false));

    assert_eq!(ctl.step_backward(), Ok(true));
    assert_eq!(ctl.position(), (last - 1, PlaybackState::Paused));
}

#[test]
fn test_idle_operations_report_not_ready() {
    let (mut ctl, _) = controller(100);

    assert!(matches!(ctl.step_forward(), Err(PlaybackError::NotReady { .. })));
    assert!(matches!(ctl.reset(), Err(PlaybackError::NotReady { .. })));
    assert!(matches!(ctl.toggle(), Err(PlaybackError::NotReady { .. })));
    assert_eq!(ctl.state(), PlaybackState::Idle);
}

#[test]
fn test_toggle_switches_between_play_and_pause() {
    let (mut ctl, _) = controller(100);
    ctl.load(bubble());

    ctl.toggle().expect("Toggle failed");
    assert!(ctl.is_playing());
    ctl.toggle().expect("Toggle failed");
    assert_eq!(ctl.state(), PlaybackState::Paused);
}

#[test]
fn test_loading_a_new_sequence_stops_playback() {
    let (mut ctl, clock) = controller(50);
    ctl.load(bubble());
    ctl.play().expect("Play failed");
    clock.advance_ms(50);
    ctl.poll();

    let search = trace(AlgorithmKind::Linear, &[1, 2, 3], Some(3)).expect("Tracing failed");
    ctl.load(search);
    assert_eq!(ctl.position(), (0, PlaybackState::Paused));
    assert_eq!(ctl.next_deadline(), None);
    assert_eq!(
        ctl.sequence().map(|s| s.algorithm()),
        Some(AlgorithmKind::Linear)
    );
}
