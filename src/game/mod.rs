// Game module - owns the window's screens and switches between them
//
// This module contains:
// - frame.rs: GameFrame, the owner of the current screen

pub mod frame;

pub use frame::GameFrame;
