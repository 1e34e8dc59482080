//! Box shadow tokens

use serde::{Deserialize, Serialize};

/// Shadow token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowKey {
    None,
    S,
    M,
    L,
}

impl ShadowKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [ShadowKey] {
        const KEYS: [ShadowKey; 4] = [ShadowKey::None, ShadowKey::S, ShadowKey::M, ShadowKey::L];
        &KEYS
    }
}

/// Box shadow presets (full CSS `box-shadow` values).
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowScale {
    pub none: String,
    pub s: String,
    pub m: String,
    pub l: String,
}

impl ShadowScale {
    /// Build the default shadow ramp around one shadow color.
    pub fn with_color(color: &str) -> Self {
        Self {
            none: "none".into(),
            s: format!("0 1px 2px 0 {color}"),
            m: format!("0 4px 6px -1px {color}, 0 2px 4px -1px {color}"),
            l: format!("0 10px 15px -3px {color}, 0 4px 6px -2px {color}"),
        }
    }

    pub fn get(&self, key: ShadowKey) -> &str {
        match key {
            ShadowKey::None => &self.none,
            ShadowKey::S => &self.s,
            ShadowKey::M => &self.m,
            ShadowKey::L => &self.l,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        ShadowKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialShadowScale) -> Self {
        super::merge_fields!(self, overrides: none, s, m, l);
        self
    }
}

impl Default for ShadowScale {
    fn default() -> Self {
        Self::with_color("rgba(0,0,0,0.1)")
    }
}

/// Sparse shadow override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialShadowScale {
    pub none: Option<String>,
    pub s: Option<String>,
    pub m: Option<String>,
    pub l: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ramp_uses_the_light_shadow_color() {
        let shadows = ShadowScale::default();
        assert_eq!(shadows.s, "0 1px 2px 0 rgba(0,0,0,0.1)");
        assert!(shadows.m.contains(", 0 2px 4px -1px"));
    }
}
