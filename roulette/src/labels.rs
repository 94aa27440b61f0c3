use std::collections::BTreeMap;

/// The display names for the bet catalogue, keyed by canonical bet keys such
/// as `"black"` or `"split"`. Built once and passed to whoever needs outcome
/// names (the bin builder, fixed-outcome strategies); there is no ambient
/// global lookup.
#[derive(Debug, Clone)]
pub struct Labels {
    names: BTreeMap<String, String>,
}

impl Labels {
    /// A mapping from explicit key/name pairs, for localized catalogues.
    pub fn new(names: BTreeMap<String, String>) -> Self {
        Labels { names }
    }

    /// The display name for a canonical key. Asking for a key the mapping was
    /// not built with is a programming error and panics, like a missing
    /// resource-bundle entry.
    pub fn get(&self, key: &str) -> &str {
        self.names
            .get(key)
            .unwrap_or_else(|| panic!("no bet name for key {:?}", key))
    }
}

impl Default for Labels {
    /// The en-US names.
    fn default() -> Self {
        let pairs = [
            ("red", "Red"),
            ("black", "Black"),
            ("even", "Even"),
            ("odd", "Odd"),
            ("low", "Low"),
            ("high", "High"),
            ("split", "Split"),
            ("street", "Street"),
            ("corner", "Corner"),
            ("line", "Line"),
            ("dozen", "Dozen"),
            ("column", "Column"),
            ("five", "Five Bet"),
        ];
        Labels {
            names: pairs
                .into_iter()
                .map(|(key, name)| (key.to_string(), name.to_string()))
                .collect(),
        }
    }
}
