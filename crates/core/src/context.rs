//! Session context and user control signals
//!
//! The device has two buttons. Debouncing and raw pin handling belong to
//! the input collaborator; by the time a press reaches this module it is a
//! [`Button`] plus how long it was held. The mapping is:
//!
//! | Button | Short press        | Long press (≥ 1000 ms) |
//! |--------|--------------------|------------------------|
//! | A      | next equipment     | recalibrate            |
//! | B      | next operator      | reset accumulated state|
//!
//! Cycling the display axis pair is requested by the display collaborator
//! directly with [`ControlSignal::CycleAxisMode`].

use crate::record::{RecordError, RecordLabels};

/// Hold time at or above which a press counts as long (ms)
pub const LONG_PRESS_MS: u32 = 1000;

/// Operator names offered on the device
pub const OPERATORS: [&str; 4] = ["Player1", "Player2", "Player3", "Guest"];

/// Club currently in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Club {
    #[default]
    Driver,
    Iron3,
    Iron5,
    Iron7,
    Iron9,
    PitchingWedge,
    SandWedge,
    Putter,
}

impl Club {
    pub const ALL: [Club; 8] = [
        Club::Driver,
        Club::Iron3,
        Club::Iron5,
        Club::Iron7,
        Club::Iron9,
        Club::PitchingWedge,
        Club::SandWedge,
        Club::Putter,
    ];

    /// Label sent in the record
    pub fn name(self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::Iron3 => "3-Iron",
            Club::Iron5 => "5-Iron",
            Club::Iron7 => "7-Iron",
            Club::Iron9 => "9-Iron",
            Club::PitchingWedge => "P-Wedge",
            Club::SandWedge => "S-Wedge",
            Club::Putter => "Putter",
        }
    }

    /// Next club, wrapping from Putter back to Driver
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Axis pair shown on the live plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisMode {
    #[default]
    Xy,
    Yz,
    Xz,
}

impl AxisMode {
    pub fn next(self) -> Self {
        match self {
            AxisMode::Xy => AxisMode::Yz,
            AxisMode::Yz => AxisMode::Xz,
            AxisMode::Xz => AxisMode::Xy,
        }
    }
}

/// Physical button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
}

/// Short or long press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    Short,
    Long,
}

impl PressKind {
    pub fn classify(held_ms: u32) -> Self {
        if held_ms >= LONG_PRESS_MS {
            PressKind::Long
        } else {
            PressKind::Short
        }
    }
}

/// Requests delivered to the pipeline from the user-facing controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    CycleEquipment,
    CycleOperator,
    CycleAxisMode,
    Recalibrate,
    ResetAccumulated,
}

/// Map a classified press to the signal it raises
pub fn signal_for(button: Button, press: PressKind) -> ControlSignal {
    match (button, press) {
        (Button::A, PressKind::Short) => ControlSignal::CycleEquipment,
        (Button::A, PressKind::Long) => ControlSignal::Recalibrate,
        (Button::B, PressKind::Short) => ControlSignal::CycleOperator,
        (Button::B, PressKind::Long) => ControlSignal::ResetAccumulated,
    }
}

/// Equipment/operator selection and display axis mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub club: Club,
    operator_index: usize,
    pub axis_mode: AxisMode,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operator(&self) -> &'static str {
        OPERATORS[self.operator_index % OPERATORS.len()]
    }

    pub fn next_club(&mut self) {
        self.club = self.club.next();
    }

    pub fn next_operator(&mut self) {
        self.operator_index = (self.operator_index + 1) % OPERATORS.len();
    }

    pub fn next_axis_mode(&mut self) {
        self.axis_mode = self.axis_mode.next();
    }

    /// Labels for the structured record
    pub fn labels(&self) -> Result<RecordLabels, RecordError> {
        RecordLabels::new(self.club.name(), self.operator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn club_cycle_wraps() {
        let mut club = Club::Driver;
        for _ in 0..Club::ALL.len() {
            club = club.next();
        }
        assert_eq!(club, Club::Driver);
        assert_eq!(Club::Putter.next(), Club::Driver);
        assert_eq!(Club::Driver.next().name(), "3-Iron");
    }

    #[test]
    fn press_classification_boundary() {
        assert_eq!(PressKind::classify(0), PressKind::Short);
        assert_eq!(PressKind::classify(999), PressKind::Short);
        assert_eq!(PressKind::classify(1000), PressKind::Long);
        assert_eq!(PressKind::classify(5000), PressKind::Long);
    }

    #[test]
    fn button_mapping() {
        assert_eq!(signal_for(Button::A, PressKind::Short), ControlSignal::CycleEquipment);
        assert_eq!(signal_for(Button::A, PressKind::Long), ControlSignal::Recalibrate);
        assert_eq!(signal_for(Button::B, PressKind::Short), ControlSignal::CycleOperator);
        assert_eq!(signal_for(Button::B, PressKind::Long), ControlSignal::ResetAccumulated);
    }

    #[test]
    fn context_labels_follow_selection() {
        let mut ctx = SessionContext::new();
        let labels = ctx.labels().unwrap();
        assert_eq!(labels.equipment.as_str(), "Driver");
        assert_eq!(labels.operator.as_str(), "Player1");

        ctx.next_club();
        ctx.next_operator();
        ctx.next_operator();
        ctx.next_operator();
        let labels = ctx.labels().unwrap();
        assert_eq!(labels.equipment.as_str(), "3-Iron");
        assert_eq!(labels.operator.as_str(), "Guest");

        ctx.next_operator();
        assert_eq!(ctx.operator(), "Player1");
    }

    #[test]
    fn axis_mode_cycles() {
        let mut ctx = SessionContext::new();
        assert_eq!(ctx.axis_mode, AxisMode::Xy);
        ctx.next_axis_mode();
        ctx.next_axis_mode();
        assert_eq!(ctx.axis_mode, AxisMode::Xz);
        ctx.next_axis_mode();
        assert_eq!(ctx.axis_mode, AxisMode::Xy);
    }
}
