// src/models/mod.rs

pub mod quiz;
pub mod schedule;
pub mod score;
