use crate::calc_engine::Operator;

/// Logical input actions a session accepts, independent of the device that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    Backspace,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySub,
}

impl Action {
    /// Maps a typed character to an action. Only the characters every
    /// front-end shares are handled here; special keys are mapped by the
    /// front-end itself.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Action::Digit(c)),
            '=' | '\n' | '\r' => Some(Action::Equals),
            _ => Operator::from_char(c).map(Action::Operator),
        }
    }
}
