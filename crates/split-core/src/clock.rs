use instant::Instant;

/// Millisecond time source for temporary-effect windows.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock measured from its creation (`performance.now()` on wasm).
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
