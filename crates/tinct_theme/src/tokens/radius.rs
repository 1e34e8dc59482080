//! Border radius tokens

use serde::{Deserialize, Serialize};

/// Radius token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusKey {
    None,
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Full,
}

impl RadiusKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Full => "full",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [RadiusKey] {
        const KEYS: [RadiusKey; 8] = [
            RadiusKey::None,
            RadiusKey::Xs,
            RadiusKey::S,
            RadiusKey::M,
            RadiusKey::L,
            RadiusKey::Xl,
            RadiusKey::Xxl,
            RadiusKey::Full,
        ];
        &KEYS
    }
}

/// Radius scale (CSS lengths).
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusScale {
    pub none: String,
    pub xs: String,
    pub s: String,
    pub m: String,
    pub l: String,
    pub xl: String,
    pub xxl: String,
    pub full: String,
}

impl RadiusScale {
    pub fn get(&self, key: RadiusKey) -> &str {
        match key {
            RadiusKey::None => &self.none,
            RadiusKey::Xs => &self.xs,
            RadiusKey::S => &self.s,
            RadiusKey::M => &self.m,
            RadiusKey::L => &self.l,
            RadiusKey::Xl => &self.xl,
            RadiusKey::Xxl => &self.xxl,
            RadiusKey::Full => &self.full,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        RadiusKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialRadiusScale) -> Self {
        super::merge_fields!(self, overrides: none, xs, s, m, l, xl, xxl, full);
        self
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            none: "0".into(),
            xs: "4px".into(),
            s: "8px".into(),
            m: "16px".into(),
            l: "24px".into(),
            xl: "32px".into(),
            xxl: "40px".into(),
            full: "9999px".into(),
        }
    }
}

/// Sparse radius override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialRadiusScale {
    pub none: Option<String>,
    pub xs: Option<String>,
    pub s: Option<String>,
    pub m: Option<String>,
    pub l: Option<String>,
    pub xl: Option<String>,
    #[serde(rename = "2xl")]
    pub xxl: Option<String>,
    pub full: Option<String>,
}
