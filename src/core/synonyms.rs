use std::collections::{BTreeSet, HashMap};

/// Expanded query: original tokens plus their synonyms, deduplicated.
///
/// Ordered so that score accumulation is reproducible run to run.
pub type QueryTokens = BTreeSet<String>;

/// Lower-case `text` and split it on whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Vehicle-service vocabulary used when no table is configured.
/// Entries are looked up per token and are not required to be mutual.
const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    ("tyre", &["tire", "tires", "tyres", "wheel", "wheels"]),
    ("tyres", &["tyre", "tire", "tires", "wheel"]),
    ("tire", &["tyre", "tyres", "tires", "wheel"]),
    ("tires", &["tire", "tyre", "tyres"]),
    ("wheel", &["tyre", "tire", "rim", "alignment"]),
    ("rim", &["wheel", "sportrim"]),
    ("alignment", &["balancing", "wheel"]),
    ("oil", &["lubricant", "service", "servicing"]),
    ("service", &["servicing", "maintenance", "repair"]),
    ("servicing", &["service", "maintenance"]),
    ("repair", &["fix", "service", "workshop"]),
    ("mechanic", &["workshop", "garage", "repair"]),
    ("garage", &["workshop", "bengkel"]),
    ("workshop", &["garage", "bengkel"]),
    ("bengkel", &["workshop", "garage"]),
    ("engine", &["motor", "overhaul"]),
    ("aircon", &["ac", "aircond", "air-cond", "cooling"]),
    ("aircond", &["aircon", "ac"]),
    ("ac", &["aircon", "aircond"]),
    ("battery", &["batteries", "bateri"]),
    ("brake", &["brakes", "pad", "disc"]),
    ("brakes", &["brake", "disc"]),
    ("paint", &["spray", "bodywork", "body"]),
    ("body", &["bodywork", "panel", "dent"]),
    ("wash", &["cleaning", "detailing", "polish"]),
    ("detailing", &["polish", "wash", "coating"]),
    ("tint", &["tinting", "window"]),
    ("gearbox", &["transmission", "clutch"]),
    ("transmission", &["gearbox"]),
    ("exhaust", &["muffler", "ekzos"]),
    ("suspension", &["absorber", "shock"]),
];

/// Fixed token → synonyms table, built once and shared read-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build a table from configured entries. Keys and synonyms are
    /// lower-cased; blank keys are dropped.
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|(key, synonyms)| {
                let key = key.trim().to_lowercase();
                if key.is_empty() {
                    return None;
                }
                let synonyms = synonyms
                    .iter()
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect();
                Some((key, synonyms))
            })
            .collect();

        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synonyms configured for exactly this token
    pub fn synonyms_of(&self, token: &str) -> &[String] {
        self.entries.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Expand a raw query into its token set.
    ///
    /// Lookup is one level deep: synonyms of synonyms are not followed.
    /// An empty or whitespace-only query yields an empty set.
    pub fn expand(&self, query: &str) -> QueryTokens {
        let mut tokens = QueryTokens::new();

        for token in tokenize(query) {
            tokens.extend(self.synonyms_of(&token).iter().cloned());
            tokens.insert(token);
        }

        tokens
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        let entries = DEFAULT_SYNONYMS
            .iter()
            .map(|(key, synonyms)| {
                (key.to_string(), synonyms.iter().map(|s| s.to_string()).collect())
            })
            .collect();

        Self::new(entries)
    }
}
