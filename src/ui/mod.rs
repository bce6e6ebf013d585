/// View helpers for the search screen
///
/// - Search bar, category shortcuts, pagination and error line (controls.rs)
/// - Thumbnail grid and loading indicator (grid.rs)

pub mod controls;
pub mod grid;
