/// Rendering capabilities of the environment the pages are built for.
///
/// Derived once from configuration and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Whether `<img>` elements can render SVG sources.
    pub svg: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { svg: true }
    }
}
