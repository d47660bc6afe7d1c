use crate::dispatch::SearchRequest;
use crate::errors::DispatchError;
use crate::index::CandidateIndex;
use tracing::debug;

/// Upper bound on the suggestion list shown to the user.
pub const MAX_SUGGESTIONS: usize = 10;

/// One user interaction, as reported by the hosting layer.
///
/// The host owns input focus, pointer geometry, and key decoding; the session
/// only sees the distilled event. `OutsideInteraction` in particular is a
/// boolean signal the host derives from its own containment check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TextChanged(String),
    Focus,
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    SuggestionClicked(String),
    OutsideInteraction,
}

/// What the host must do after applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Hand the committed search to the navigation collaborator.
    Dispatch(SearchRequest),
    /// Block the dispatch and show the user a prompt.
    Reject(DispatchError),
}

/// Observable state of the session, derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Suggesting,
    Highlighted,
}

/// Keystroke-driven suggestion state over a fixed [`CandidateIndex`].
///
/// Single-owner and event-serialized: every mutation happens through
/// [`SuggestionSession::apply`] on the host's event loop.
///
/// Invariant: the highlight is either `None` or a valid index into the
/// current suggestion list, and recomputing the list always clears it.
#[derive(Debug, Clone)]
pub struct SuggestionSession {
    index: CandidateIndex,
    input: String,
    date: String,
    suggestions: Vec<String>,
    highlight: Option<usize>,
}

impl SuggestionSession {
    pub fn new(index: CandidateIndex) -> Self {
        Self {
            index,
            input: String::new(),
            date: String::new(),
            suggestions: Vec::new(),
            highlight: None,
        }
    }

    /// Replace the date filter. Kept verbatim and attached to every
    /// dispatch; never validated here.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight
    }

    pub fn phase(&self) -> SessionPhase {
        if self.suggestions.is_empty() {
            SessionPhase::Idle
        } else if self.highlight.is_some() {
            SessionPhase::Highlighted
        } else {
            SessionPhase::Suggesting
        }
    }

    /// Apply one event and return the effect, if any, the host must perform.
    pub fn apply(&mut self, event: SessionEvent) -> Option<SessionEffect> {
        match event {
            SessionEvent::TextChanged(text) => {
                self.input = text;
                self.recompute_suggestions();
                None
            }
            SessionEvent::Focus => {
                self.recompute_suggestions();
                None
            }
            SessionEvent::ArrowDown => {
                self.move_highlight_down();
                None
            }
            SessionEvent::ArrowUp => {
                self.move_highlight_up();
                None
            }
            SessionEvent::Enter => self.commit(),
            SessionEvent::Escape | SessionEvent::OutsideInteraction => {
                self.dismiss();
                None
            }
            SessionEvent::SuggestionClicked(keyword) => {
                self.input = keyword.clone();
                self.dismiss();
                Some(SessionEffect::Dispatch(SearchRequest::new(
                    keyword,
                    self.date.clone(),
                )))
            }
        }
    }

    /// Recompute the suggestion list for the current input and drop the
    /// highlight. Blank input means no suggestions at all.
    fn recompute_suggestions(&mut self) {
        if self.input.trim().is_empty() {
            self.suggestions.clear();
        } else {
            self.suggestions = self.index.prefix_matches(&self.input, MAX_SUGGESTIONS);
        }
        self.highlight = None;
    }

    fn move_highlight_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len();
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(current) => (current + 1) % len,
        });
    }

    fn move_highlight_up(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len();
        self.highlight = Some(match self.highlight {
            None => len - 1,
            Some(current) => (current + len - 1) % len,
        });
    }

    fn commit(&mut self) -> Option<SessionEffect> {
        if let Some(selected) = self
            .highlight
            .and_then(|i| self.suggestions.get(i).cloned())
        {
            debug!("committing highlighted suggestion: {selected}");
            self.input = selected.clone();
            self.dismiss();
            return Some(SessionEffect::Dispatch(SearchRequest::new(
                selected,
                self.date.clone(),
            )));
        }

        if self.input.is_empty() {
            return Some(SessionEffect::Reject(DispatchError::EmptyKeyword));
        }

        debug!("dispatching raw input: {}", self.input);
        Some(SessionEffect::Dispatch(SearchRequest::new(
            self.input.clone(),
            self.date.clone(),
        )))
    }

    fn dismiss(&mut self) {
        self.suggestions.clear();
        self.highlight = None;
    }
}
