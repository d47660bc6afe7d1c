pub mod dispatch;
pub mod errors;
pub mod index;
pub mod keyword;
pub mod session;

pub use crate::dispatch::SearchRequest;
pub use crate::errors::DispatchError;
pub use crate::index::{CandidateIndex, FailurePolicy, KeywordIndexBuilder};
pub use crate::keyword::extract_keywords_from_titles;
pub use crate::session::{SessionEffect, SessionEvent, SessionPhase, SuggestionSession};
