//! Substitutable placeholder value model for office document templating.
//!
//! A templating engine fills predefined placeholders in office document
//! templates (word-processing, spreadsheet, presentation) with runtime data.
//! This crate owns the value side of that contract: the data a caller attaches
//! to a placeholder before handing it to the engine. The engine reads these
//! values, it never mutates them.
//!
//! The central type is [`ImageValue`]: a shared [`ImageResource`] plus layout
//! and accessibility metadata. Dimensions are stored canonically in
//! millimeters — [`UnitOfLength`] converts on the way in — and
//! [`ExtendedValue`] is the abstraction through which the engine obtains
//! fallback text from any non-text value.

pub mod error;
pub mod extended;
pub mod image;
pub mod resource;
pub mod units;

pub use error::{ValueError, ValueResult};
pub use extended::ExtendedValue;
pub use image::{DEFAULT_HEIGHT_MM, DEFAULT_WIDTH_MM, ImageValue};
pub use resource::{ImageFormat, ImageResource};
pub use units::UnitOfLength;
