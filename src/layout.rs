//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where components were rendered and `region_at()`
//! tells which one is under a mouse click.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
