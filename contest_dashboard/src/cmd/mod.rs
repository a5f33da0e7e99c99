pub mod fetch;
pub mod server;

use crate::modules::contests::fetcher::ContestWindow;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, ValueEnum, Clone, Copy)]
pub enum TargetWindow {
    Upcoming,
    Past,
}

impl fmt::Display for TargetWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetWindow::Upcoming => write!(f, "upcoming"),
            TargetWindow::Past => write!(f, "past"),
        }
    }
}

impl From<TargetWindow> for ContestWindow {
    fn from(window: TargetWindow) -> Self {
        match window {
            TargetWindow::Upcoming => ContestWindow::Upcoming,
            TargetWindow::Past => ContestWindow::Past,
        }
    }
}
