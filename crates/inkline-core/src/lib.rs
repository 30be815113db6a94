//! Inkline Core - Basic data structures for notation analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the inkline stroke-extraction pipeline:
//!
//! - [`RgbRaster`] / [`GrayRaster`] / [`HsvRaster`] - the three
//!   representations of the source image
//! - [`BinaryMask`] - 0/255 ink mask produced by segmentation
//! - [`Rect`] - stroke bounding rectangles
//! - [`Sample`] / [`StrokeParams`] / [`StrokeInfo`] - per-hop
//!   measurements and the assembled per-stroke output
//!
//! Preprocessing lives here as raster methods: [`RgbRaster::downscale`],
//! [`RgbRaster::add_vertical_border`], [`RgbRaster::to_gray`], and
//! [`RgbRaster::to_hsv`].

pub mod color;
pub mod error;
pub mod geom;
pub mod params;
pub mod raster;

pub use color::{HUE_RANGE, Hsv};
pub use error::{CoreError, CoreResult};
pub use geom::Rect;
pub use params::{Sample, StrokeInfo, StrokeParams};
pub use raster::{BinaryMask, GrayRaster, HsvRaster, RgbRaster};
