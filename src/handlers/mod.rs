// src/handlers/mod.rs

pub mod quiz;
pub mod schedule;
pub mod scores;
