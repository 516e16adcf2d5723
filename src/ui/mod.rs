//! Page markup and the terminal UI.
//!
//! - `markup`: markup tree, HTML serialization and text flattening
//! - `views`: view functions producing markup for each container
//! - `render`: frame layout and rendering of the page state
//! - `input`: keyboard and mouse event handling
//! - `styles`: color schemes and text styling

pub mod input;
pub mod markup;
pub mod render;
pub mod styles;
pub mod views;
