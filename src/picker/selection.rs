use super::sampler::SampleResult;

/// Whether the committed readout follows the pointer or is pinned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Hovering,
    Locked,
}

/// Hover/lock state machine plus the two readouts it drives.
///
/// The live readout tracks every sample unconditionally. The committed
/// readout (what the hex/rgb fields show) follows live samples only while
/// `Hovering`; entering `Locked` pins it to the sample at the click point.
#[derive(Default)]
pub struct Selection {
    state: SelectionState,
    live: Option<SampleResult>,
    committed: Option<SampleResult>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == SelectionState::Locked
    }

    pub fn live(&self) -> Option<SampleResult> {
        self.live
    }

    pub fn committed(&self) -> Option<SampleResult> {
        self.committed
    }

    /// Feed one pointer-move sample through the state machine.
    pub fn apply_sample(&mut self, sample: SampleResult) {
        self.live = Some(sample);
        if self.state == SelectionState::Hovering {
            self.committed = Some(sample);
        }
    }

    /// The commit action (click). `at_click` is the sample resolved at the
    /// click position itself.
    ///
    /// Locking applies that sample *before* the transition so the pin
    /// captures the click point, not a stale prior hover sample. Unlocking
    /// transitions first so the same sample immediately re-syncs the
    /// committed readout.
    pub fn toggle(&mut self, at_click: Option<SampleResult>) -> SelectionState {
        match self.state {
            SelectionState::Hovering => {
                if let Some(s) = at_click {
                    self.apply_sample(s);
                }
                self.state = SelectionState::Locked;
            }
            SelectionState::Locked => {
                self.state = SelectionState::Hovering;
                if let Some(s) = at_click {
                    self.apply_sample(s);
                }
            }
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: u32, r: u8) -> SampleResult {
        SampleResult {
            pixel_x: x,
            pixel_y: 0,
            r,
            g: 0,
            b: 0,
            a: 255,
        }
    }

    #[test]
    fn test_hovering_committed_tracks_live() {
        let mut sel = Selection::new();
        for i in 0..5 {
            sel.apply_sample(sample(i, i as u8));
            assert_eq!(sel.committed(), sel.live());
        }
    }

    #[test]
    fn test_lock_pins_click_sample_not_prior_hover() {
        let mut sel = Selection::new();
        sel.apply_sample(sample(1, 10));
        let state = sel.toggle(Some(sample(2, 20)));
        assert_eq!(state, SelectionState::Locked);
        assert_eq!(sel.committed(), Some(sample(2, 20)));
    }

    #[test]
    fn test_moves_while_locked_keep_committed_frozen() {
        let mut sel = Selection::new();
        sel.toggle(Some(sample(2, 20)));
        sel.apply_sample(sample(3, 30));
        sel.apply_sample(sample(4, 40));
        assert_eq!(sel.committed(), Some(sample(2, 20)));
        // The live readout keeps updating regardless.
        assert_eq!(sel.live(), Some(sample(4, 40)));
    }

    #[test]
    fn test_unlock_resyncs_immediately() {
        let mut sel = Selection::new();
        sel.toggle(Some(sample(2, 20)));
        // Unlock carries the click position; committed re-syncs right away,
        // not on some later pointer move.
        let state = sel.toggle(Some(sample(7, 70)));
        assert_eq!(state, SelectionState::Hovering);
        assert_eq!(sel.committed(), Some(sample(7, 70)));
        // …and the next move keeps it live again.
        sel.apply_sample(sample(8, 80));
        assert_eq!(sel.committed(), Some(sample(8, 80)));
    }

    #[test]
    fn test_toggle_without_sample_still_transitions() {
        let mut sel = Selection::new();
        sel.apply_sample(sample(1, 10));
        sel.toggle(None);
        assert!(sel.is_locked());
        assert_eq!(sel.committed(), Some(sample(1, 10)));
        sel.toggle(None);
        assert!(!sel.is_locked());
    }
}
