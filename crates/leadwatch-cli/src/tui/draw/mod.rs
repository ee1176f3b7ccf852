use super::*;

mod overlays;
mod screens;
mod shell;

use overlays::{draw_alert, draw_lead_detail};
use screens::draw_loading;
