//! Debounced re-parsing for documents that change while being displayed.
//!
//! The parser itself is a pure function of the text. [`LiveDocument`] adds
//! the bookkeeping around it: edits restart a timer, a settled document hands
//! out a [`ParseRequest`] tagged with a [`Revision`], and only the outcome for
//! the most recently requested revision is ever applied.

use std::time::{Duration, Instant};

use crate::block::Block;
use crate::Options;

/// Delay between the last edit and the parse it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Monotonically increasing parse request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Revision(pub u64);

/// An owned snapshot of the document, ready to parse on any thread.
#[derive(Debug, Clone)]
pub struct ParseRequest {
    pub revision: Revision,
    pub text: String,
    pub options: Options,
}

impl ParseRequest {
    /// Parse the snapshot.
    pub fn run(self) -> ParseOutcome {
        let blocks = crate::parse_with_options(&self.text, &self.options);
        ParseOutcome {
            revision: self.revision,
            blocks,
        }
    }
}

/// Result of a [`ParseRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub revision: Revision,
    pub blocks: Vec<Block>,
}

#[derive(Debug)]
struct PendingEdit {
    text: String,
    last_edit: Instant,
}

/// Debounced parse state for one document.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use linemark::LiveDocument;
///
/// let mut doc = LiveDocument::new(Duration::from_millis(150));
/// let t0 = Instant::now();
/// doc.edit_at("# Draft", t0);
/// assert!(doc.poll_at(t0 + Duration::from_millis(50)).is_none());
///
/// let request = doc.poll_at(t0 + Duration::from_millis(150)).unwrap();
/// assert!(doc.apply(request.run()));
/// assert_eq!(doc.blocks().len(), 1);
/// ```
#[derive(Debug)]
pub struct LiveDocument {
    delay: Duration,
    options: Options,
    next_revision: u64,
    pending: Option<PendingEdit>,
    latest_requested: Option<Revision>,
    applied: Option<Revision>,
    blocks: Vec<Block>,
}

impl LiveDocument {
    /// Creates a document with the given debounce delay and default options.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            options: Options::default(),
            next_revision: 1,
            pending: None,
            latest_requested: None,
            applied: None,
            blocks: Vec::new(),
        }
    }

    /// Sets parse options and returns self for method chaining.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an edit now, restarting the debounce timer.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.edit_at(text, Instant::now());
    }

    /// Records an edit at `now`. Only the latest text is kept.
    pub fn edit_at(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(PendingEdit {
            text: text.into(),
            last_edit: now,
        });
    }

    /// Whether an edit is waiting for its delay to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self) -> Option<ParseRequest> {
        self.poll_at(Instant::now())
    }

    /// Hands out a request once the delay since the last edit has passed.
    pub fn poll_at(&mut self, now: Instant) -> Option<ParseRequest> {
        let settled = self
            .pending
            .as_ref()
            .is_some_and(|edit| now.saturating_duration_since(edit.last_edit) >= self.delay);
        if settled { self.flush() } else { None }
    }

    /// Hands out a request for the pending edit regardless of the timer.
    pub fn flush(&mut self) -> Option<ParseRequest> {
        let edit = self.pending.take()?;
        let revision = Revision(self.next_revision);
        self.next_revision += 1;
        self.latest_requested = Some(revision);
        Some(ParseRequest {
            revision,
            text: edit.text,
            options: self.options,
        })
    }

    /// Installs an outcome if it answers the latest request.
    ///
    /// Returns false for superseded outcomes, which are dropped.
    pub fn apply(&mut self, outcome: ParseOutcome) -> bool {
        if Some(outcome.revision) != self.latest_requested {
            log::debug!(
                "discarding parse result for revision {}; latest requested is {:?}",
                outcome.revision.0,
                self.latest_requested.map(|r| r.0)
            );
            return false;
        }
        self.applied = Some(outcome.revision);
        self.blocks = outcome.blocks;
        true
    }

    /// Blocks of the most recently applied outcome.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn applied_revision(&self) -> Option<Revision> {
        self.applied
    }
}

impl Default for LiveDocument {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
