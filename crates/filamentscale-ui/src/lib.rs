//! FilamentScale UI Crate
//!
//! The weight display view-model and its two UI seams: the observable
//! display binding and the optional status-panel augmentation port. The
//! rendering layer owns how either surface is drawn.

pub mod adapter;
pub mod display;
pub mod status_panel;

pub use adapter::{CalibrationState, FaultDiagnostic, FaultHook, WeightDisplayAdapter};
pub use display::{DisplaySink, SharedDisplay, INITIAL_DISPLAY};
pub use status_panel::{StatusPanel, StatusPanelModel, FILAMENT_REMAINING_LABEL};
