//! Interactive inpainting mask editor core.
//!
//! A host application feeds this crate a decoded raster and display-space
//! pointer events; the crate maintains the stroke state and produces two
//! artifacts after every mutation: a translucent overlay for on-screen
//! feedback and a mask raster in which every painted pixel is fully
//! transparent, ready to hand to an external fill service.

pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod frame;
pub mod generate;
pub mod geometry;
pub mod logging;
pub mod render;

pub use editor::{BrushStroke, MaskEditor, StrokeHistory};
pub use error::{AppError, AppResult};
pub use frame::ImageFrame;
pub use geometry::{compute_scale, ImagePoint, ViewTransform, ViewportBounds};
