//! Accessibility & Multimodal check
//!
//! Alt text is the only description of an image a text-only engine gets.
//!
//! A page without any images grades ALARM, the same as a page where every
//! image lacks alt text. This matches the established scoring; the verdict
//! details say "No images found" so the two cases stay distinguishable.

use crate::checks::base::Check;
use crate::document::{Element, HtmlDocument};
use crate::evidence;
use crate::models::{Category, Verdict};

pub struct AccessibilityCheck;

impl AccessibilityCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AccessibilityCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-empty `alt` after trimming. Whitespace-only `alt=" "` counts as missing,
/// which is stricter than a plain non-empty test.
fn has_alt_text(img: &Element<'_>) -> bool {
    img.attr("alt").is_some_and(|alt| !alt.trim().is_empty())
}

impl Check for AccessibilityCheck {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn description(&self) -> &'static str {
        "Checks that every <img> has alt text"
    }

    fn category(&self) -> Category {
        Category::Accessibility
    }

    fn run(&self, doc: &HtmlDocument) -> Verdict {
        let images: Vec<Element<'_>> = doc.find_by_tag("img").collect();
        let total = images.len();
        let with_alt = images.iter().filter(|img| has_alt_text(img)).count();
        let first_missing = || evidence::first_offender(images.iter().copied(), |img| !has_alt_text(img));

        if total > 0 && with_alt == total {
            Verdict::ok(format!("All {} image(s) have alt text.", total))
        } else if with_alt > 0 {
            Verdict::info(
                format!(
                    "{} of {} image(s) have alt text. Add descriptive alt text to the rest.",
                    with_alt, total
                ),
                first_missing(),
            )
        } else if total == 0 {
            Verdict::alarm("No images found, so no image has alt text.", None)
        } else {
            Verdict::alarm(
                format!("Poor accessibility. None of the {} image(s) have alt text.", total),
                first_missing(),
            )
        }
    }
}
