//! Feature gates.
//!
//! A feature gate is a named boolean switch which must be turned on before
//! the code paths of the corresponding capability may run. Gates are plain
//! values owned by the application settings; consumers receive the
//! resolved boolean instead of querying process-wide state.

use commons::prelude_errors::*;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Maturity of a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Alpha,
    Beta,
    GA,
}

/// Registration data for a known feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSpec {
    /// Value used when no override is set.
    pub default: bool,
    /// Maturity stage.
    pub stage: Stage,
}

/// All features known to this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString)]
pub enum Feature {
    /// Allow controllers to migrate from one leader lock to another.
    ControllerManagerLeaderMigration,
}

impl Feature {
    /// Registration data for this feature.
    pub fn spec(self) -> FeatureSpec {
        match self {
            Feature::ControllerManagerLeaderMigration => FeatureSpec {
                default: false,
                stage: Stage::Alpha,
            },
        }
    }

    /// Names of all known features, with their stage, for help output.
    pub fn known_features() -> Vec<String> {
        Feature::iter()
            .map(|f| {
                let spec = f.spec();
                format!("{}=true|false ({:?} - default={})", f, spec.stage, spec.default)
            })
            .collect()
    }
}

/// Process feature gate: registered defaults plus explicit overrides.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FeatureGate {
    overrides: BTreeMap<Feature, bool>,
}

impl FeatureGate {
    /// Whether `feature` is enabled.
    pub fn enabled(&self, feature: Feature) -> bool {
        self.overrides
            .get(&feature)
            .copied()
            .unwrap_or_else(|| feature.spec().default)
    }

    /// Explicitly set `feature` to `value`.
    pub fn set(&mut self, feature: Feature, value: bool) {
        self.overrides.insert(feature, value);
    }

    /// Apply overrides from a `Name=bool,...` string.
    ///
    /// Nothing is applied if any entry is invalid.
    pub fn set_from_str(&mut self, input: &str) -> Fallible<()> {
        let mut parsed = Vec::new();
        for (name, value) in commons::parse_bool_pairs(input)? {
            let feature = Feature::from_str(&name)
                .map_err(|_| {
                    format_err!(
                        "unrecognized feature gate: {} (known: {})",
                        name,
                        Feature::known_features().join(", ")
                    )
                })?;
            parsed.push((feature, value));
        }

        for (feature, value) in parsed {
            debug!("feature gate {} set to {}", feature, value);
            self.set(feature, value);
        }
        Ok(())
    }
}

impl FromStr for FeatureGate {
    type Err = Error;

    fn from_str(input: &str) -> Fallible<Self> {
        let mut gate = FeatureGate::default();
        gate.set_from_str(input)?;
        Ok(gate)
    }
}

impl fmt::Debug for FeatureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(Feature::iter().map(|feat| (feat, self.enabled(feat))))
            .finish()
    }
}
