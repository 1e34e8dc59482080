//! Transition speed tokens

use serde::{Deserialize, Serialize};

/// Transition speed keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TransitionKey {
    Instant,
    Fast,
    Normal,
    Slow,
}

impl TransitionKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [TransitionKey] {
        const KEYS: [TransitionKey; 4] = [
            TransitionKey::Instant,
            TransitionKey::Fast,
            TransitionKey::Normal,
            TransitionKey::Slow,
        ];
        &KEYS
    }
}

/// Transition durations (CSS time values).
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionSpeeds {
    pub instant: String,
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

impl TransitionSpeeds {
    pub fn get(&self, key: TransitionKey) -> &str {
        match key {
            TransitionKey::Instant => &self.instant,
            TransitionKey::Fast => &self.fast,
            TransitionKey::Normal => &self.normal,
            TransitionKey::Slow => &self.slow,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        TransitionKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialTransitionSpeeds) -> Self {
        super::merge_fields!(self, overrides: instant, fast, normal, slow);
        self
    }
}

impl Default for TransitionSpeeds {
    fn default() -> Self {
        Self {
            instant: "0ms".into(),
            fast: "100ms".into(),
            normal: "200ms".into(),
            slow: "400ms".into(),
        }
    }
}

/// Sparse transition override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialTransitionSpeeds {
    pub instant: Option<String>,
    pub fast: Option<String>,
    pub normal: Option<String>,
    pub slow: Option<String>,
}
