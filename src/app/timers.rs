//! Cancellable scheduled tasks on a logical millisecond clock
//!
//! The plane runs single-threaded: every reaction happens inside a call
//! that carries `now_ms`, and timers are drained explicitly by the event
//! loop. `Debouncer` builds "only the last call wins" on top of it.

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<E> {
    id: TaskId,
    due_ms: u64,
    event: E,
}

/// Queue of events due at future instants
///
/// Due tasks fire in due-time order; tasks due at the same instant fire
/// in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    next_id: u64,
    tasks: Vec<ScheduledTask<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Schedules `event` to fire once `due_ms` is reached
    pub fn schedule(&mut self, due_ms: u64, event: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        // Insert after every task due at or before `due_ms` to keep FIFO ties.
        let index = self.tasks.partition_point(|task| task.due_ms <= due_ms);
        self.tasks.insert(index, ScheduledTask { id, due_ms, event });
        id
    }

    /// Schedules `event` to fire `delay_ms` after `now_ms`
    pub fn schedule_in(&mut self, now_ms: u64, delay_ms: u64, event: E) -> TaskId {
        self.schedule(now_ms.saturating_add(delay_ms), event)
    }

    /// Cancels a pending task; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Instant at which the next task becomes due
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.first().map(|task| task.due_ms)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Removes and returns every task due at or before `now_ms`
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<E> {
        let due = self.tasks.partition_point(|task| task.due_ms <= now_ms);
        self.tasks.drain(..due).map(|task| task.event).collect()
    }
}

/// Collapses bursts of calls so only the most recent one fires
///
/// Each call cancels the task scheduled by the previous call and schedules
/// a fresh one `delay_ms` later.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    pending: Option<TaskId>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn call<E>(&mut self, scheduler: &mut Scheduler<E>, now_ms: u64, event: E) -> TaskId {
        self.cancel(scheduler);
        let id = scheduler.schedule_in(now_ms, self.delay_ms, event);
        self.pending = Some(id);
        id
    }

    /// Drops the pending call, if any
    pub fn cancel<E>(&mut self, scheduler: &mut Scheduler<E>) -> bool {
        self.pending
            .take()
            .is_some_and(|id| scheduler.cancel(id))
    }

    pub fn is_pending<E>(&self, scheduler: &Scheduler<E>) -> bool {
        self.pending.is_some_and(|id| scheduler.is_scheduled(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_due_order_with_fifo_ties() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(30, "c");
        scheduler.schedule(10, "a");
        scheduler.schedule(30, "d");
        scheduler.schedule(20, "b");

        assert_eq!(scheduler.next_due(), Some(10));
        assert_eq!(scheduler.drain_due(5), Vec::<&str>::new());
        assert_eq!(scheduler.drain_due(20), vec!["a", "b"]);
        assert_eq!(scheduler.drain_due(100), vec!["c", "d"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_due(), None);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule_in(0, 10, 1);
        let drop = scheduler.schedule_in(0, 10, 2);

        assert!(scheduler.cancel(drop));
        assert!(!scheduler.cancel(drop));
        assert!(scheduler.is_scheduled(keep));
        assert_eq!(scheduler.drain_due(10), vec![1]);
        assert!(!scheduler.cancel(keep));
    }

    #[test]
    fn debouncer_keeps_only_last_call() {
        let mut scheduler = Scheduler::new();
        let mut debouncer = Debouncer::new(300);

        debouncer.call(&mut scheduler, 0, "first");
        debouncer.call(&mut scheduler, 100, "second");
        debouncer.call(&mut scheduler, 250, "third");
        assert_eq!(scheduler.pending(), 1);

        assert!(scheduler.drain_due(500).is_empty());
        assert!(debouncer.is_pending(&scheduler));
        assert_eq!(scheduler.drain_due(550), vec!["third"]);
        assert!(!debouncer.is_pending(&scheduler));
    }

    #[test]
    fn debouncer_fires_again_after_quiet_window() {
        let mut scheduler = Scheduler::new();
        let mut debouncer = Debouncer::new(300);

        debouncer.call(&mut scheduler, 0, 1);
        assert_eq!(scheduler.drain_due(300), vec![1]);

        debouncer.call(&mut scheduler, 400, 2);
        assert_eq!(scheduler.drain_due(700), vec![2]);
    }

    #[test]
    fn debouncer_cancel_drops_pending_call() {
        let mut scheduler = Scheduler::new();
        let mut debouncer = Debouncer::new(300);

        debouncer.call(&mut scheduler, 0, ());
        assert!(debouncer.cancel(&mut scheduler));
        assert!(!debouncer.cancel(&mut scheduler));
        assert!(scheduler.drain_due(1_000).is_empty());
    }
}
