//! Application layer: the view controller and the surfaces that drive it.

pub mod commands;
pub mod console;
pub mod controller;
pub mod error;
pub mod forms;
pub mod view;
