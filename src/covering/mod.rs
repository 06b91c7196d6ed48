//! Greedy circle covering of point sets.
//!
//! # Algorithm
//!
//! Repeatedly peel one circle off the unassigned pool: choose a center that
//! covers as many remaining points as possible ([`select_center`]), take at
//! most `max_per_circle` of the points around it, and remove them from the
//! pool. Every point ends up in exactly one circle.
//!
//! - [`cover`] / [`cover_with_rng`] — one owner's unassigned points
//! - [`cover_by_owner`] — group by owner, skip already-assigned points
//! - [`split_circle`] — break an oversized manual circle into chunks
//!
//! This is a greedy approximation of set cover, not an exact optimizer: it
//! does not minimize the number of circles.

mod center;
mod config;
mod engine;
mod naming;
mod palette;
mod split;

pub use center::select_center;
pub use config::{CoverConfig, Naming};
pub use engine::{cover, cover_by_owner, cover_with_rng};
pub use naming::{alphabetical_name, numeric_name};
pub use palette::{palette_color, DEFAULT_PALETTE, OWNER_PALETTE};
pub use split::split_circle;
