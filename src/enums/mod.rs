pub mod chart_slot;
pub mod commands;
