//! Profile Builder
//!
//! The ProfileBuilder assembles a [`MunicipalProfile`] from metric builders,
//! overlay rules and narrative text, deriving the file slug from the name
//! when none is given.

use super::metric_builder::MetricBuilder;
use crate::model::{
    MetricDefinition, MunicipalProfile, Narrative, OverlayRule, YearWindow,
};

/// Builder for a complete municipal profile
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: String,
    slug: Option<String>,
    metrics: Vec<MetricDefinition>,
    overlay: Vec<OverlayRule>,
    narrative: Narrative,
}

impl ProfileBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            metrics: Vec::new(),
            overlay: Vec::new(),
            narrative: Narrative::default(),
        }
    }

    /// Override the derived file slug
    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Append a metric; column order follows call order
    #[must_use]
    pub fn metric(mut self, metric: impl Into<MetricDefinition>) -> Self {
        self.metrics.push(metric.into());
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: impl IntoIterator<Item = MetricBuilder>) -> Self {
        self.metrics.extend(metrics.into_iter().map(MetricBuilder::build));
        self
    }

    // =========================================================================
    // Overlay rules (kept in call order)
    // =========================================================================

    #[must_use]
    pub fn rule(mut self, rule: OverlayRule) -> Self {
        self.overlay.push(rule);
        self
    }

    /// `value *= factor` over `window`
    #[must_use]
    pub fn scale(
        self,
        label: impl Into<String>,
        metric: impl Into<String>,
        window: YearWindow,
        factor: f64,
    ) -> Self {
        self.rule(OverlayRule::scale(label, metric, window, factor))
    }

    /// `value *= 1 + rate * (year - from)` from `from` onwards
    #[must_use]
    pub fn ramp(
        self,
        label: impl Into<String>,
        metric: impl Into<String>,
        from: i16,
        rate: f64,
    ) -> Self {
        self.rule(OverlayRule::ramp(label, metric, from, rate))
    }

    // =========================================================================
    // Narrative
    // =========================================================================

    #[must_use]
    pub fn milestone(mut self, text: impl Into<String>) -> Self {
        self.narrative.milestones.push(text.into());
        self
    }

    #[must_use]
    pub fn recommendation(mut self, text: impl Into<String>) -> Self {
        self.narrative.recommendations.push(text.into());
        self
    }

    #[must_use]
    pub fn build(self) -> MunicipalProfile {
        let slug = self.slug.unwrap_or_else(|| slugify(&self.name));
        MunicipalProfile {
            name: self.name,
            slug,
            metrics: self.metrics,
            overlay: self.overlay,
            narrative: self.narrative,
        }
    }
}

/// Lowercase ASCII, accents folded, everything else collapsed to `_`
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        let folded = match c {
            'à' | 'â' | 'ä' | 'À' | 'Â' => 'a',
            'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
            _ => '_',
        };
        if folded == '_' && (slug.is_empty() || slug.ends_with('_')) {
            continue;
        }
        slug.push(folded);
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}
