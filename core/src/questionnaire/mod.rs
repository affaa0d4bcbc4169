//! Ayurvedic constitution questionnaire.
//!
//! # Architecture
//!
//! - **Questions**: Loaded from TOML (embedded default or a custom file)
//! - **Session**: Index-based state machine with select / advance / retreat
//! - **Scoring**: Answer set -> additive per-dosha totals
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ayurskin_core::questionnaire::{default_questionnaire, Advance, QuestionnaireSession};
//!
//! let mut session = QuestionnaireSession::new(Arc::new(default_questionnaire()));
//! let mut outcome = None;
//! while outcome.is_none() {
//!     session.select(3).unwrap();
//!     if let Advance::Complete(scores) = session.advance().unwrap() {
//!         outcome = Some(scores);
//!     }
//! }
//! assert_eq!(outcome.unwrap().total(), 18);
//! ```

mod rules;
mod scoring;
mod session;
mod types;

pub use rules::{default_questionnaire, load_questionnaire, parse_questionnaire};
pub use scoring::score_answers;
pub use session::{Advance, QuestionnaireSession};
pub use types::*;
