//! Container extensions: 2-D grids, case-insensitive maps, list editing.

mod grid;
mod ignore_case;
mod list;

pub use grid::{Column, Grid};
pub use ignore_case::{eq_ignore_case, IgnoreCaseExt};
pub use list::ListExt;
