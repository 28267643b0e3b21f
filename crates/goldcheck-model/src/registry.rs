//! Profile registry shape: alias → profile-definition path, plus the
//! ordered glob rules that route file paths to aliases.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The registry document. Rule order encodes precedence: resolution
/// walks `rules` top to bottom and the first match wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Registry {
    pub profiles: BTreeMap<String, String>,
    #[serde(default)]
    pub rules: Vec<RegistryRule>,
}

/// One routing rule: a glob pattern and the profile alias it selects.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryRule {
    #[serde(rename = "match")]
    pub matcher: MatchSpec,
    pub profile: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchSpec {
    pub glob: String,
}
