use crate::hex_diff::config::Config;

/// What to print for one compared block.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LineAction {
    Same,
    Ellipsis,
    Diff,
    Suppress,
}

/// Tracks the current run of equal blocks.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct RunState {
    eq_run: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive equal blocks seen since the last differing block.
    pub fn eq_run(&self) -> u64 {
        self.eq_run
    }

    pub fn observe(&mut self, equal: bool, config: &Config) -> LineAction {
        if !equal {
            self.eq_run = 0;
            return LineAction::Diff;
        }

        let action = if config.show_all {
            LineAction::Same
        } else if config.skip_same {
            LineAction::Suppress
        } else {
            match self.eq_run {
                0 => LineAction::Same,
                1 => LineAction::Ellipsis,
                _ => LineAction::Suppress,
            }
        };
        self.eq_run = self.eq_run.saturating_add(1);
        action
    }
}
