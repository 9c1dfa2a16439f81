//! Image placeholder value.
//!
//! Binds a shared [`ImageResource`] to presentation metadata: explicit
//! dimensions stored canonically in millimeters, an optional title and
//! description, and a flag telling the consuming engine whether dimensions
//! already present in the template should be replaced.

use crate::error::{ValueError, ValueResult};
use crate::extended::ExtendedValue;
use crate::resource::ImageResource;
use crate::units::UnitOfLength;

/// Width applied when a caller never sets dimensions: 3 cm.
pub const DEFAULT_WIDTH_MM: f64 = 30.0;

/// Height applied when a caller never sets dimensions: 1 cm.
pub const DEFAULT_HEIGHT_MM: f64 = 10.0;

/// Image placeholder value handed to the templating engine.
///
/// The resource reference is fixed at construction; everything else is
/// configured through fluent setters that return the same instance:
///
/// ```
/// use office_template_values::{ImageFormat, ImageResource, ImageValue, UnitOfLength};
///
/// # fn main() -> Result<(), office_template_values::ValueError> {
/// let logo = ImageResource::from_bytes(b"\x89PNG\r\n".to_vec(), ImageFormat::Png)?;
/// let mut value = ImageValue::new(logo);
/// value
///     .set_title(Some("Cover"))
///     .set_dimension(4.0, 2.0, UnitOfLength::Centimeters)?
///     .set_overwrite_dimension(true);
/// assert_eq!(value.width_mm(), 40.0);
/// # Ok(())
/// # }
/// ```
///
/// The intended lifecycle is single-writer: the caller configures the value,
/// then hands it to the engine, which only reads. There is no internal
/// synchronization; concurrent mutation needs external locking.
#[derive(Debug, Clone)]
pub struct ImageValue {
    resource: ImageResource,
    title: Option<String>,
    description: Option<String>,
    /// Width in millimeters, always > 0.
    width_mm: f64,
    /// Height in millimeters, always > 0.
    height_mm: f64,
    overwrite_dimension: bool,
}

impl ImageValue {
    /// Creates a value for `resource` with default dimensions
    /// ([`DEFAULT_WIDTH_MM`] × [`DEFAULT_HEIGHT_MM`]), no title, no
    /// description, and `overwrite_dimension` off.
    pub fn new(resource: ImageResource) -> Self {
        Self {
            resource,
            title: None,
            description: None,
            width_mm: DEFAULT_WIDTH_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            overwrite_dimension: false,
        }
    }

    /// Sets or clears the accessibility title.
    ///
    /// `None`, empty, and whitespace-only input all clear the title.
    pub fn set_title(&mut self, title: Option<&str>) -> &mut Self {
        self.title = normalize_text(title);
        self
    }

    /// Sets or clears the description, which doubles as the value's alternate
    /// text. Normalizes like [`set_title`](ImageValue::set_title).
    pub fn set_description(&mut self, description: Option<&str>) -> &mut Self {
        self.description = normalize_text(description);
        self
    }

    /// Sets both dimensions, converting the magnitudes from `unit` into
    /// millimeters.
    ///
    /// Width is validated before height, and validation fully precedes
    /// mutation: a rejected call leaves both stored dimensions untouched.
    ///
    /// # Errors
    /// Returns [`ValueError::NonPositiveWidth`] or
    /// [`ValueError::NonPositiveHeight`] when the respective magnitude is
    /// zero, negative, or NaN.
    pub fn set_dimension(
        &mut self,
        width: f64,
        height: f64,
        unit: UnitOfLength,
    ) -> ValueResult<&mut Self> {
        if width <= 0.0 || width.is_nan() {
            return Err(ValueError::NonPositiveWidth { value: width });
        }
        if height <= 0.0 || height.is_nan() {
            return Err(ValueError::NonPositiveHeight { value: height });
        }

        self.width_mm = unit.to_millimeters(width);
        self.height_mm = unit.to_millimeters(height);
        Ok(self)
    }

    /// Tells the engine whether to replace dimensions already present in the
    /// template with this value's width and height. Advisory; the engine may
    /// ignore it.
    pub fn set_overwrite_dimension(&mut self, overwrite: bool) -> &mut Self {
        self.overwrite_dimension = overwrite;
        self
    }

    /// The resource set at construction.
    pub fn resource(&self) -> &ImageResource {
        &self.resource
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Width in millimeters.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Height in millimeters.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn is_overwrite_dimension(&self) -> bool {
        self.overwrite_dimension
    }
}

impl ExtendedValue for ImageValue {
    fn alt_string(&self) -> Option<&str> {
        self.description()
    }
}

fn normalize_text(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).map(str::to_owned)
}
