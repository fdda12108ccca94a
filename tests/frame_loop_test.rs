use std::time::Duration;

use twod_scene::{
    flow::{FrameLoop, LoopEvent, LoopState},
    time::TickClock,
};
use winit::{dpi::PhysicalSize, event::WindowEvent};

use crate::common::test_utils::Recorder;

mod common;

const NO_EVENTS: [LoopEvent; 0] = [];

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn should_keep_running_without_quit() {
    let mut frame_loop = FrameLoop::new();
    let mut frame = Recorder::new();
    for t in [16, 32, 48] {
        let state = frame_loop
            .iterate([LoopEvent::Ignored], ms(t), &mut frame)
            .unwrap();
        assert_eq!(state, LoopState::Running);
    }
    assert_eq!(frame.update_invocations(), 3);
    assert_eq!(frame.render_invocations(), 3);
}

#[test]
fn should_finish_iteration_that_sees_quit_then_stop() {
    let mut frame_loop = FrameLoop::new();
    let mut frame = Recorder::new();

    frame_loop.iterate(NO_EVENTS, ms(10), &mut frame).unwrap();
    let state = frame_loop
        .iterate([LoopEvent::Ignored, LoopEvent::Quit], ms(20), &mut frame)
        .unwrap();
    assert_eq!(state, LoopState::Stopped);
    assert_eq!(frame.update_invocations(), 2);
    assert_eq!(frame.render_invocations(), 2);

    for t in [30, 40] {
        let state = frame_loop.iterate(NO_EVENTS, ms(t), &mut frame).unwrap();
        assert_eq!(state, LoopState::Stopped);
    }
    assert!(!frame_loop.is_running());
    assert_eq!(frame.update_invocations(), 2);
    assert_eq!(frame.render_invocations(), 2);
}

#[test]
fn should_step_by_tick_differences() {
    let mut frame_loop = FrameLoop::new();
    let mut frame = Recorder::new();
    for t in [0, 500, 1000] {
        frame_loop.iterate(NO_EVENTS, ms(t), &mut frame).unwrap();
    }
    assert_eq!(frame.deltas(), [0.0f32, 0.5, 0.5].as_slice());
}

#[test]
fn first_delta_is_absolute_tick_value() {
    let mut clock = TickClock::new();
    assert_eq!(clock.delta(ms(1250)), 1.25);
    assert_eq!(clock.delta(ms(1500)), 0.25);
}

#[test]
fn stalls_are_not_clamped() {
    let mut clock = TickClock::new();
    clock.delta(ms(1000));
    assert_eq!(clock.delta(ms(31_000)), 30.0);
}

#[test]
fn only_close_and_destroy_quit() {
    assert_eq!(LoopEvent::from(&WindowEvent::CloseRequested), LoopEvent::Quit);
    assert_eq!(LoopEvent::from(&WindowEvent::Destroyed), LoopEvent::Quit);
    assert_eq!(LoopEvent::from(&WindowEvent::Focused(true)), LoopEvent::Ignored);
    assert_eq!(
        LoopEvent::from(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
        LoopEvent::Ignored
    );
}

#[test]
fn stop_prevents_any_further_frame() {
    let mut frame_loop = FrameLoop::new();
    let mut frame = Recorder::new();
    frame_loop.stop();
    frame_loop.iterate(NO_EVENTS, ms(16), &mut frame).unwrap();
    assert_eq!(frame.update_invocations(), 0);
    assert_eq!(frame.render_invocations(), 0);
}
