//! Password strength analysis library
//!
//! This library rates a candidate password, reports which mandatory
//! requirements it meets and suggests how to improve it. It is meant to run
//! on every keystroke of a password form.
//!
//! # Features
//!
//! - `async`: Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for the analysis types
//!
//! # Environment Variables
//!
//! - `PWD_ANALYZER_COMMON_WORDS_PATH`: Word list used by [`CommonWords::from_env`]
//!   (default: built-in list)
//!
//! The variable is only read when [`CommonWords::from_env`] is called.
//! [`evaluate`] and [`evaluate_secret`] never touch the environment or the
//! filesystem and always use the built-in list; a loaded list only applies
//! through an explicit [`Evaluator::new`].
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{evaluate, Strength};
//!
//! let analysis = evaluate("Tr7#mK9$qLpZ");
//!
//! assert_eq!(analysis.strength, Strength::VeryStrong);
//! assert_eq!(analysis.score, 110);
//! assert!(analysis.checks.iter().all(|c| c.passed));
//! assert!(analysis.suggestions.is_empty());
//! ```

// Internal modules
mod analysis;
mod common_words;
mod evaluator;
mod sections;

// Public API
pub use analysis::{Analysis, Check, Strength};
pub use common_words::{CommonWords, CommonWordsError, COMMON_WORDS_PATH_ENV};
pub use evaluator::{evaluate, evaluate_secret, Evaluator};
pub use sections::{MIN_LENGTH, RECOMMENDED_LENGTH, SPECIAL_CHARACTERS};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_debounced, DEBOUNCE};
