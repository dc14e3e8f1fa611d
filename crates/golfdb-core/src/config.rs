// crates/golfdb-core/src/config.rs
use serde::{Deserialize, Serialize};

/// Default number of clubs returned by nearby and text search.
pub const DEFAULT_RESULT_LIMIT: usize = 20;
/// Default number of autocomplete entries.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
/// Default radius for [`find_within_radius`](crate::search::find_within_radius).
pub const DEFAULT_RADIUS_MILES: f64 = 10.0;

/// Limits applied by the [`ClubDb`](crate::ClubDb) convenience methods.
///
/// The free functions in [`search`](crate::search) and
/// [`index`](crate::index) take their limits explicitly and ignore this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub nearby_limit: usize,
    pub text_limit: usize,
    pub suggestion_limit: usize,
    pub default_radius_miles: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            nearby_limit: DEFAULT_RESULT_LIMIT,
            text_limit: DEFAULT_RESULT_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            default_radius_miles: DEFAULT_RADIUS_MILES,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Builder for [`SearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Sets both the nearby and the text search limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.nearby_limit = limit;
        self.config.text_limit = limit;
        self
    }

    pub fn nearby_limit(mut self, limit: usize) -> Self {
        self.config.nearby_limit = limit;
        self
    }

    pub fn text_limit(mut self, limit: usize) -> Self {
        self.config.text_limit = limit;
        self
    }

    pub fn suggestion_limit(mut self, limit: usize) -> Self {
        self.config.suggestion_limit = limit;
        self
    }

    /// Non-finite or negative radii are ignored.
    pub fn default_radius_miles(mut self, miles: f64) -> Self {
        if miles.is_finite() && miles >= 0.0 {
            self.config.default_radius_miles = miles;
        }
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.nearby_limit, 20);
        assert_eq!(config.text_limit, 20);
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.default_radius_miles, 10.0);
    }

    #[test]
    fn test_method_chaining() {
        let config = SearchConfig::builder()
            .limit(5)
            .text_limit(50)
            .suggestion_limit(3)
            .default_radius_miles(25.0)
            .build();
        assert_eq!(config.nearby_limit, 5);
        assert_eq!(config.text_limit, 50);
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.default_radius_miles, 25.0);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let config = SearchConfig::builder()
            .default_radius_miles(f64::NAN)
            .default_radius_miles(-1.0)
            .build();
        assert_eq!(config.default_radius_miles, DEFAULT_RADIUS_MILES);
    }
}
