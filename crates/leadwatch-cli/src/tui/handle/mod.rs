use super::*;

mod actions;
mod dispatch;
