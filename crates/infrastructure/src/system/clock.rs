use chrono::{Local, NaiveTime};
use seer_application::ports::ClockPort;

/// Local wall clock; schedules are evaluated in the router's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}
