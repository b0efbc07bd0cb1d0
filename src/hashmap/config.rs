//! The configuration of a HashMap.

use super::failure::Result;
use super::hashcore::capacity::{
    Capacity, MaxLoadFactor, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR
};

/// Config
///
/// The tunables of a `HashMap`, fixed at construction:
///
/// -   `initial_capacity`: the number of slots allocated up-front, at least 1.
/// -   `max_load_factor`: the ratio of elements to slots which the `HashMap`
///     stays strictly below, within `(0, 1]`.
///
/// The maximum load factor can be adjusted later on, with
/// `HashMap::try_set_max_load_factor`.
///
/// #   Example
///
/// ```
/// #   use lineprobe::hashmap::Config;
/// let config = Config::default();
///
/// assert_eq!(16, config.initial_capacity);
/// assert_eq!(0.75, config.max_load_factor);
///
/// let config = config.with_initial_capacity(4).with_max_load_factor(0.5);
/// assert!(config.validate().is_ok());
///
/// let config = config.with_max_load_factor(1.5);
/// assert!(config.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// The number of slots allocated up-front.
    pub initial_capacity: usize,
    /// The maximum load factor.
    pub max_load_factor: f32,
}

impl Config {
    /// Overrides the initial capacity.
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self { initial_capacity, ..self }
    }

    /// Overrides the maximum load factor.
    pub fn with_max_load_factor(self, max_load_factor: f32) -> Self {
        Self { max_load_factor, ..self }
    }

    /// Checks the configuration.
    ///
    /// #   Errors
    ///
    /// Returns an error if the initial capacity is 0, or if the maximum load
    /// factor is not within `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        self.parse().map(|_| ())
    }

    //  Checks the configuration, and converts it.
    pub(crate) fn parse(&self) -> Result<(Capacity, MaxLoadFactor)> {
        let capacity = Capacity::new(self.initial_capacity)?;
        let factor = MaxLoadFactor::new(self.max_load_factor)?;

        Ok((capacity, factor))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_CAPACITY, max_load_factor: DEFAULT_MAX_LOAD_FACTOR }
    }
}
