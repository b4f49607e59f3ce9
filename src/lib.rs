//! Floorplan Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, InteractionState, UiState, ViewState,
};
pub use core::{
    snap_point, snap_to_axis, Camera3D, FloorLine, FloorPlan, FloorPlanError, FloorPoint, LineId,
    PointId, Ray,
};
pub use shared::{EditorOptions, MarkerHandle, PickTable, RenderScene};
