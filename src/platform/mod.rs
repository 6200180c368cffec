//! Host integrations for the engine's frame clock and pointer feed.

pub mod headless;
pub mod web;
