use super::*;

mod layout;
mod style;

pub(in crate::tui) use layout::*;
pub(in crate::tui) use style::*;
