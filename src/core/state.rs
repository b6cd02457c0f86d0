//! The sixteen states of the TAP controller.

use super::graph::TransitionTable;

state_enum! {
    /// A state of the JTAG TAP controller.
    ///
    /// Variants are declared in the order the controller's state diagram is
    /// conventionally listed: the two idle states, then the data-register
    /// column, then the instruction-register column. That order is the
    /// enumeration order used everywhere a table is walked or emitted.
    pub enum TapState {
        TestLogicReset,
        RunTestIdle,

        SelectDR,
        CaptureDR,
        ShiftDR,
        Exit1DR,
        PauseDR,
        Exit2DR,
        UpdateDR,

        SelectIR,
        CaptureIR,
        ShiftIR,
        Exit1IR,
        PauseIR,
        Exit2IR,
        UpdateIR,
    }
}

/// Five clocks with TMS held high reach Test-Logic-Reset from every state.
pub const RESET_SEQUENCE: [bool; 5] = [true; 5];

impl TapState {
    /// State reached after clocking `tms` on the standard controller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tapwalk::TapState;
    ///
    /// assert_eq!(TapState::RunTestIdle.transition(false), TapState::RunTestIdle);
    /// assert_eq!(TapState::RunTestIdle.transition(true), TapState::SelectDR);
    /// ```
    pub const fn transition(self, tms: bool) -> TapState {
        TransitionTable::STANDARD.successor(self, tms)
    }

    /// Whether the controller can stay in this state for any number of
    /// clocks (the state has a self-loop).
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::TestLogicReset
                | Self::RunTestIdle
                | Self::ShiftDR
                | Self::PauseDR
                | Self::ShiftIR
                | Self::PauseIR
        )
    }
}
