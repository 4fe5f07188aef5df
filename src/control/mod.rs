pub mod parameters;
pub mod simulation;
