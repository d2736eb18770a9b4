use serde::{Serialize, Deserialize};

use crate::error::ForestError;

use std::fmt;
use std::str::FromStr;


/// The two target classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// The class of interest, written as `s`.
    Signal,
    /// Everything else, written as `b`.
    Background,
}


impl Label {
    /// Returns `true` for [`Label::Signal`].
    #[inline(always)]
    pub fn is_signal(&self) -> bool {
        matches!(self, Label::Signal)
    }


    /// The single-character code used in the data files.
    #[inline]
    pub fn as_char(&self) -> char {
        match self {
            Label::Signal => 's',
            Label::Background => 'b',
        }
    }
}


impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}


impl FromStr for Label {
    type Err = ForestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "s" => Ok(Label::Signal),
            "b" => Ok(Label::Background),
            other => Err(ForestError::UnknownLabel { label: other.to_string() }),
        }
    }
}
