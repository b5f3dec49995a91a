//! Core simulation for a terminal rendition of the Alien Invasion arcade
//! shooter: a ship fires upward at a descending, edge-bouncing fleet of
//! aliens while score, level and lives are tracked.
//!
//! Everything in this crate is presentation-agnostic. The binary's
//! `display` module translates state into terminal commands; the modules
//! here only know positions, boxes and events.

pub mod collision;
pub mod config;
pub mod entities;
pub mod fleet;
pub mod session;
pub mod stats;
