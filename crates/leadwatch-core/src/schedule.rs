use std::time::{Duration, Instant};

/// Identifies one issued request so late completions can be recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter; only the most recently issued ticket is current.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    issued: u64,
    outstanding: bool,
}

impl RequestSeq {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        self.outstanding = true;
        Ticket(self.issued)
    }

    /// Marks `ticket` as answered. Returns false when a newer ticket exists or
    /// the sequence was invalidated after `ticket` was issued.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.outstanding && ticket.0 == self.issued {
            self.outstanding = false;
            true
        } else {
            false
        }
    }

    /// Drops every outstanding ticket.
    pub fn invalidate(&mut self) {
        self.issued += 1;
        self.outstanding = false;
    }

    pub fn in_flight(&self) -> bool {
        self.outstanding
    }
}

/// Fixed-interval timer evaluated against caller-supplied instants.
#[derive(Clone, Debug)]
pub struct PollSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reports one firing when the deadline has passed and re-arms from `now`,
    /// so a stalled loop never fires a burst of catch-up ticks.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_completes() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.complete(first));
        assert!(seq.in_flight());
        assert!(seq.complete(second));
        assert!(!seq.in_flight());
        assert!(!seq.complete(second));
    }

    #[test]
    fn invalidate_discards_outstanding() {
        let mut seq = RequestSeq::default();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.in_flight());
        assert!(!seq.complete(ticket));
    }

    #[test]
    fn schedule_fires_once_per_interval() {
        let start = Instant::now();
        let mut schedule = PollSchedule::new(Duration::from_secs(300));
        assert!(!schedule.fire_if_due(start + Duration::from_secs(600)));
        schedule.start(start);
        assert!(!schedule.fire_if_due(start + Duration::from_secs(299)));
        assert!(schedule.fire_if_due(start + Duration::from_secs(300)));
        assert!(!schedule.fire_if_due(start + Duration::from_secs(301)));
        assert!(schedule.fire_if_due(start + Duration::from_secs(900)));
        assert!(!schedule.fire_if_due(start + Duration::from_secs(901)));
    }

    #[test]
    fn stopped_schedule_never_fires() {
        let start = Instant::now();
        let mut schedule = PollSchedule::new(Duration::from_secs(1));
        schedule.start(start);
        schedule.stop();
        assert!(!schedule.is_running());
        assert!(!schedule.fire_if_due(start + Duration::from_secs(10)));
    }
}
