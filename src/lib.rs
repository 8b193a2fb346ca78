//! keycalc - keypad-style calculator core
//!
//! Entries arrive the way a pocket calculator receives them: digits build the
//! current entry, an operator commits it, equals evaluates the whole pending
//! expression with the usual precedence (`*` and `/` before `+` and `-`,
//! left to right otherwise).
//!
//! ```rust
//! use keycalc::{Action, Operator, Session};
//!
//! let mut session = Session::new();
//! for action in [
//!     Action::Digit('2'),
//!     Action::Operator(Operator::Add),
//!     Action::Digit('3'),
//!     Action::Operator(Operator::Mul),
//!     Action::Digit('4'),
//!     Action::Equals,
//! ] {
//!     session.apply(action);
//! }
//! assert_eq!(session.current_entry(), "14");
//! assert_eq!(session.history_display(), "2 + 3 * 4 = 14");
//! ```

pub mod action;
pub mod calc_engine;
pub mod error;
pub mod session;

pub use action::Action;
pub use calc_engine::{Operator, Step, Token};
pub use error::{CalcError, Result, DIV_ZERO_MARKER, ERROR_MARKER};
pub use session::{HistoryEntry, Session, SessionConfig, DEFAULT_HISTORY_LIMIT};
