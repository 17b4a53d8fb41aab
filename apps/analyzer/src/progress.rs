//! Progress reporting — one external 0–100 signal shared by the upload
//! and extraction sub-states.
//!
//! A [`Progress`] handle writes into a `watch` channel and only ever moves
//! the published value forward. `window` carves out a sub-range so each
//! pipeline stage can report its own 0–100 while the observer sees a
//! single merged bar (upload fills the lower window, extraction the
//! upper). Observers poll the receiver without blocking the pipeline.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Clone)]
pub struct Progress {
    tx: Arc<watch::Sender<u8>>,
    base: u8,
    span: u8,
}

impl Progress {
    /// Creates a root 0–100 handle and its observer side.
    pub fn channel() -> (Self, watch::Receiver<u8>) {
        let (tx, rx) = watch::channel(0u8);
        (
            Self {
                tx: Arc::new(tx),
                base: 0,
                span: 100,
            },
            rx,
        )
    }

    /// A handle covering `[base, base + span]` of this handle's range.
    /// A stage reporting 0–100 through the window lands inside that slice
    /// of the merged bar.
    pub fn window(&self, base: u8, span: u8) -> Self {
        debug_assert!(base as u16 + span as u16 <= 100);
        Self {
            tx: self.tx.clone(),
            base: self.base + scale(self.span, base),
            span: scale(self.span, span),
        }
    }

    /// Publishes `pct` (clamped to 100) mapped into this handle's range.
    /// Values that would move the bar backwards are dropped, so the
    /// published sequence is monotonically increasing.
    pub fn set(&self, pct: u8) {
        let value = self.base + scale(self.span, pct.min(100));
        self.tx.send_if_modified(|current| {
            if value > *current {
                *current = value;
                true
            } else {
                false
            }
        });
    }

    /// Drops the bar back to zero. Only the session's reset path calls
    /// this; stages never move backwards.
    pub fn reset(&self) {
        self.tx.send_if_modified(|current| {
            if *current != 0 {
                *current = 0;
                true
            } else {
                false
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.tx.subscribe()
    }
}

fn scale(span: u8, pct: u8) -> u8 {
    ((span as u16 * pct as u16) / 100) as u8
}
