//! Reusable UI components

mod impact_counter;
mod inquiry_modal;

pub use impact_counter::*;
pub use inquiry_modal::*;
