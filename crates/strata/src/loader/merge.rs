//! Precedence fold across configuration layers.

use crate::values::ConfigValues;

/// Collapse an ordered stack of layers onto the defaults.
///
/// Later layers win: each one overwrites the keys it names and leaves the
/// rest alone. Values are replaced wholesale, so a nested mapping in a later
/// layer hides the earlier mapping entirely.
pub(crate) fn fold_layers(defaults: ConfigValues, layers: Vec<ConfigValues>) -> ConfigValues {
    layers
        .into_iter()
        .fold(defaults, |merged, layer| merged.merge(&layer))
}
