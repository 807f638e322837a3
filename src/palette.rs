//! Card color categories and their two-stop art gradients.
//!
//! The table is fixed at compile time. Lookups never fail: any category the
//! table does not know resolves to the red gradient.

use image::Rgb;

/// Top and bottom colors of a vertical card-art gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    /// Color of the first row
    pub top: Rgb<u8>,
    /// Color of the last row
    pub bottom: Rgb<u8>,
}

impl GradientSpec {
    /// Create a gradient from two RGB triples.
    pub const fn new(top: [u8; 3], bottom: [u8; 3]) -> Self {
        Self { top: Rgb(top), bottom: Rgb(bottom) }
    }
}

/// Names of every category with a dedicated gradient, in table order.
///
/// The first entry doubles as the fallback for unknown categories.
pub const KNOWN_CATEGORIES: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "purple"];

/// Gradients for [`KNOWN_CATEGORIES`], index for index.
const GRADIENTS: [GradientSpec; 6] = [
    GradientSpec::new([211, 47, 47], [183, 28, 28]),
    GradientSpec::new([251, 140, 0], [239, 108, 0]),
    GradientSpec::new([251, 192, 45], [245, 127, 23]),
    GradientSpec::new([67, 160, 71], [46, 125, 50]),
    GradientSpec::new([30, 136, 229], [21, 101, 192]),
    GradientSpec::new([142, 36, 170], [106, 27, 154]),
];

/// Look up the gradient for a color category.
///
/// Matching ignores ASCII case. Unrecognized categories get the red gradient.
///
/// # Examples
///
/// ```
/// use cardart::palette::gradient_for;
///
/// let blue = gradient_for("blue");
/// assert_eq!(blue.top.0, [30, 136, 229]);
///
/// // Unknown colors fall back to red
/// assert_eq!(gradient_for("teal"), gradient_for("red"));
/// ```
pub fn gradient_for(category: &str) -> GradientSpec {
    lookup(category).unwrap_or(GRADIENTS[0])
}

fn lookup(category: &str) -> Option<GradientSpec> {
    KNOWN_CATEGORIES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(category))
        .map(|i| GRADIENTS[i])
}
