use std::cell::RefCell;

/// At most one pending deferred run. The handle is held until `complete`,
/// since dropping a `gloo` animation frame cancels it.
pub struct FrameCoalescer<H> {
    pending: RefCell<Option<H>>,
}

impl<H> Default for FrameCoalescer<H> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(None),
        }
    }
}

impl<H> FrameCoalescer<H> {
    pub fn schedule(&self, start: impl FnOnce() -> H) -> bool {
        if self.pending.borrow().is_some() {
            return false;
        }

        let handle = start();
        *self.pending.borrow_mut() = Some(handle);
        true
    }

    pub fn complete(&self) -> Option<H> {
        self.pending.borrow_mut().take()
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn burst_starts_one_run() {
        let coalescer = FrameCoalescer::default();
        let started = Cell::new(0);

        for _ in 0..25 {
            coalescer.schedule(|| started.set(started.get() + 1));
        }

        assert_eq!(started.get(), 1);
        assert!(coalescer.is_pending());
    }

    #[test]
    fn completion_reopens_the_slot() {
        let coalescer = FrameCoalescer::default();

        assert!(coalescer.schedule(|| 1u32));
        assert!(!coalescer.schedule(|| 2u32));
        assert_eq!(coalescer.complete(), Some(1));
        assert!(!coalescer.is_pending());
        assert!(coalescer.schedule(|| 3u32));
        assert_eq!(coalescer.complete(), Some(3));
    }

    #[test]
    fn complete_without_pending_is_harmless() {
        let coalescer: FrameCoalescer<()> = FrameCoalescer::default();
        assert_eq!(coalescer.complete(), None);
    }
}
