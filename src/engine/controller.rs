//! User-input control loop

use super::status::SimulationStatus;
use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long one poll may wait for input. Bounds quit latency without
/// spinning the controller thread.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Discrete control events from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    SpeedUp,
    SpeedDown,
    Quit,
}

/// Non-blocking input collaborator. One call yields at most one event and
/// may wait internally up to `timeout`.
pub trait InputSource {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<ControlEvent>>;
}

/// Applies control events to the shared status. Speed changes are
/// debounced per event kind with last-accepted timestamps, so a held key
/// produces one change per debounce window while `Quit` is acted on
/// immediately.
pub struct Controller {
    status: Arc<SimulationStatus>,
    input: Box<dyn InputSource>,
    debounce: Duration,
    last_speed_up: Option<Instant>,
    last_speed_down: Option<Instant>,
}

impl Controller {
    pub fn new(status: Arc<SimulationStatus>, input: Box<dyn InputSource>, debounce: Duration) -> Self {
        Self {
            status,
            input,
            debounce,
            last_speed_up: None,
            last_speed_down: None,
        }
    }

    /// Run until the stop flag is observed. A `Quit` event sets the flag
    /// itself; the loop then exits on its next check.
    pub fn run(&mut self) -> Result<()> {
        while self.status.is_enabled() {
            match self.input.poll_event(POLL_TIMEOUT)? {
                Some(ControlEvent::SpeedUp) => {
                    if Self::window_elapsed(&self.last_speed_up, self.debounce) {
                        self.status.speed_up();
                        self.last_speed_up = Some(Instant::now());
                    }
                }
                Some(ControlEvent::SpeedDown) => {
                    // A no-op at the floor must not consume the window.
                    if Self::window_elapsed(&self.last_speed_down, self.debounce)
                        && self.status.speed_down()
                    {
                        self.last_speed_down = Some(Instant::now());
                    }
                }
                Some(ControlEvent::Quit) => self.status.request_stop(),
                None => {}
            }
        }
        Ok(())
    }

    /// Whether the previous accepted event of this kind is at least one
    /// debounce window in the past. The window only starts when an event
    /// is accepted and actually changes the speed.
    fn window_elapsed(last: &Option<Instant>, debounce: Duration) -> bool {
        match last {
            Some(previous) => previous.elapsed() >= debounce,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Input source that replays a fixed script, then reports no events.
    struct ScriptedInput {
        events: VecDeque<ControlEvent>,
    }

    impl ScriptedInput {
        fn new(events: &[ControlEvent]) -> Self {
            Self {
                events: events.iter().copied().collect(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll_event(&mut self, _timeout: Duration) -> Result<Option<ControlEvent>> {
            Ok(self.events.pop_front())
        }
    }

    fn run_script(initial_speed: u32, debounce: Duration, events: &[ControlEvent]) -> Arc<SimulationStatus> {
        let status = Arc::new(SimulationStatus::new(0, initial_speed));
        let mut controller = Controller::new(
            Arc::clone(&status),
            Box::new(ScriptedInput::new(events)),
            debounce,
        );
        controller.run().unwrap();
        status
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let status = run_script(1, Duration::ZERO, &[ControlEvent::Quit]);
        assert!(!status.is_enabled());
    }

    #[test]
    fn test_speed_changes_without_debounce() {
        let status = run_script(
            1,
            Duration::ZERO,
            &[
                ControlEvent::SpeedUp,
                ControlEvent::SpeedUp,
                ControlEvent::SpeedUp,
                ControlEvent::SpeedDown,
                ControlEvent::Quit,
            ],
        );
        assert_eq!(status.speed(), 3);
    }

    #[test]
    fn test_speed_floor_holds_under_repeated_speed_down() {
        let status = run_script(
            1,
            Duration::ZERO,
            &[
                ControlEvent::SpeedDown,
                ControlEvent::SpeedDown,
                ControlEvent::SpeedDown,
                ControlEvent::Quit,
            ],
        );
        assert_eq!(status.speed(), 1);
    }

    #[test]
    fn test_debounce_coalesces_rapid_repeats() {
        // Script replays faster than the window: only the first SpeedUp of
        // each kind lands.
        let status = run_script(
            1,
            Duration::from_secs(60),
            &[
                ControlEvent::SpeedUp,
                ControlEvent::SpeedUp,
                ControlEvent::SpeedUp,
                ControlEvent::Quit,
            ],
        );
        assert_eq!(status.speed(), 2);
    }

    #[test]
    fn test_debounce_is_per_event_kind() {
        let status = run_script(
            5,
            Duration::from_secs(60),
            &[
                ControlEvent::SpeedUp,
                ControlEvent::SpeedDown,
                ControlEvent::Quit,
            ],
        );
        // Each kind gets its own first acceptance: 5 + 1 - 1.
        assert_eq!(status.speed(), 5);
    }

    #[test]
    fn test_floor_noop_does_not_consume_debounce_window() {
        // The first SpeedDown is a no-op at the floor; the later one must
        // still be accepted even inside a long debounce window.
        let status = run_script(
            1,
            Duration::from_secs(60),
            &[
                ControlEvent::SpeedDown,
                ControlEvent::SpeedUp,
                ControlEvent::SpeedDown,
                ControlEvent::Quit,
            ],
        );
        assert_eq!(status.speed(), 1);
    }

    #[test]
    fn test_quit_is_never_debounced() {
        // A speed event inside the debounce window must not delay quit.
        let status = run_script(
            1,
            Duration::from_secs(60),
            &[
                ControlEvent::SpeedUp,
                ControlEvent::SpeedUp,
                ControlEvent::Quit,
            ],
        );
        assert!(!status.is_enabled());
    }

    #[test]
    fn test_events_after_quit_are_ignored() {
        let status = run_script(
            1,
            Duration::ZERO,
            &[ControlEvent::Quit, ControlEvent::SpeedUp],
        );
        assert!(!status.is_enabled());
        assert_eq!(status.speed(), 1);
    }
}
