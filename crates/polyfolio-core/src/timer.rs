use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Pending<T> {
    id: TimerId,
    due_sec: f64,
    payload: T,
}

/// One-shot timers on a simulated clock advanced by frame deltas.
///
/// Firing only hands payloads back to the owner; nothing runs inside the queue.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now_sec: f64,
    next_id: u64,
    pending: SmallVec<[Pending<T>; 4]>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_sec: 0.0,
            next_id: 0,
            pending: SmallVec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn schedule_after(&mut self, delay_sec: f32, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_sec: self.now_sec + delay_sec.max(0.0) as f64,
            payload,
        });
        id
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn now_sec(&self) -> f64 {
        self.now_sec
    }

    /// Move the clock forward and return due payloads, earliest first.
    pub fn advance(&mut self, dt_sec: f32) -> SmallVec<[T; 2]> {
        // Small tolerance so a 0.2 s timer fires after 0.2 s of f32 frame deltas.
        const EPS: f64 = 1e-6;
        self.now_sec += dt_sec.max(0.0) as f64;
        let mut due: SmallVec<[Pending<T>; 4]> = SmallVec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_sec <= self.now_sec + EPS {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| {
            a.due_sec
                .partial_cmp(&b.due_sec)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.0.cmp(&b.id.0))
        });
        due.into_iter().map(|p| p.payload).collect()
    }
}
