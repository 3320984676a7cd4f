//! # Screen-Reader Live Region
//!
//! Models the polite live region the infographic announces through. The
//! region is cleared before each repopulation, which is what guarantees a
//! repeated identical message is re-spoken — assistive tech only reacts to
//! text changes, so "Step 2: Self-Service Check-in" twice in a row must
//! pass through an empty state in between.

use serde::{Deserialize, Serialize};

/// A cleared-then-repopulated announcement region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRegion {
    text: String,
    spoken: Vec<String>,
}

impl LiveRegion {
    /// An empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the region, then set `message` as its text.
    ///
    /// Every call is recorded in spoken order, consecutive duplicates
    /// included — that is the observable effect of clearing first.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.text.clear();
        let message = message.into();
        self.text.push_str(&message);
        self.spoken.push(message);
    }

    /// The region's current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Drain everything spoken since the last drain, in order.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.spoken)
    }
}
