//! Spacing tokens

use serde::{Deserialize, Serialize};

/// Spacing token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingKey {
    None,
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
}

impl SpacingKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [SpacingKey] {
        const KEYS: [SpacingKey; 8] = [
            SpacingKey::None,
            SpacingKey::Xs,
            SpacingKey::S,
            SpacingKey::M,
            SpacingKey::L,
            SpacingKey::Xl,
            SpacingKey::Xxl,
            SpacingKey::Xxxl,
        ];
        &KEYS
    }
}

/// Spacing scale (CSS lengths).
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingScale {
    pub none: String,
    pub xs: String,
    pub s: String,
    pub m: String,
    pub l: String,
    pub xl: String,
    pub xxl: String,
    pub xxxl: String,
}

impl SpacingScale {
    pub fn get(&self, key: SpacingKey) -> &str {
        match key {
            SpacingKey::None => &self.none,
            SpacingKey::Xs => &self.xs,
            SpacingKey::S => &self.s,
            SpacingKey::M => &self.m,
            SpacingKey::L => &self.l,
            SpacingKey::Xl => &self.xl,
            SpacingKey::Xxl => &self.xxl,
            SpacingKey::Xxxl => &self.xxxl,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        SpacingKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialSpacingScale) -> Self {
        super::merge_fields!(self, overrides: none, xs, s, m, l, xl, xxl, xxxl);
        self
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            none: "0".into(),
            xs: "4px".into(),
            s: "8px".into(),
            m: "16px".into(),
            l: "24px".into(),
            xl: "32px".into(),
            xxl: "40px".into(),
            xxxl: "48px".into(),
        }
    }
}

/// Sparse spacing override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSpacingScale {
    pub none: Option<String>,
    pub xs: Option<String>,
    pub s: Option<String>,
    pub m: Option<String>,
    pub l: Option<String>,
    pub xl: Option<String>,
    #[serde(rename = "2xl")]
    pub xxl: Option<String>,
    #[serde(rename = "3xl")]
    pub xxxl: Option<String>,
}
