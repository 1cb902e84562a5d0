use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use crate::dom;
use crate::features::FeatureFlags;

static SVG_SRC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.svg$").expect("svg regex"));

/// Points SVG images at their PNG twins when the renderer cannot draw SVG.
///
/// Returns how many `src` attributes were rewritten.
pub fn fallback_to_raster(document: &NodeRef, flags: FeatureFlags) -> usize {
    if flags.svg {
        return 0;
    }

    let mut rewritten = 0;
    for img in dom::select_all(document, "img") {
        let Some(src) = dom::attr(&img, "src") else { continue };
        if let Some(png) = raster_src(&src) {
            dom::set_attr(&img, "src", png);
            rewritten += 1;
        }
    }
    rewritten
}

/// `.../logo.svg` becomes `.../logo.png`; anything else is left alone.
pub fn raster_src(src: &str) -> Option<String> {
    if !SVG_SRC.is_match(src) {
        return None;
    }
    let stem = &src[..src.len() - 3];
    Some(format!("{stem}png"))
}
