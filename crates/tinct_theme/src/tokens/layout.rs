//! Layout tokens: breakpoints, container widths, and z-index layers

use serde::{Deserialize, Serialize};

/// Breakpoint token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BreakpointKey {
    MobileS,
    MobileM,
    MobileL,
    Tablet,
    Laptop,
    LaptopL,
    FourK,
}

impl BreakpointKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::MobileS => "mobileS",
            Self::MobileM => "mobileM",
            Self::MobileL => "mobileL",
            Self::Tablet => "tablet",
            Self::Laptop => "laptop",
            Self::LaptopL => "laptopL",
            Self::FourK => "4k",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [BreakpointKey] {
        const KEYS: [BreakpointKey; 7] = [
            BreakpointKey::MobileS,
            BreakpointKey::MobileM,
            BreakpointKey::MobileL,
            BreakpointKey::Tablet,
            BreakpointKey::Laptop,
            BreakpointKey::LaptopL,
            BreakpointKey::FourK,
        ];
        &KEYS
    }
}

/// Media-query breakpoints (CSS widths).
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointScale {
    pub mobile_s: String,
    pub mobile_m: String,
    pub mobile_l: String,
    pub tablet: String,
    pub laptop: String,
    pub laptop_l: String,
    pub four_k: String,
}

impl BreakpointScale {
    pub fn get(&self, key: BreakpointKey) -> &str {
        match key {
            BreakpointKey::MobileS => &self.mobile_s,
            BreakpointKey::MobileM => &self.mobile_m,
            BreakpointKey::MobileL => &self.mobile_l,
            BreakpointKey::Tablet => &self.tablet,
            BreakpointKey::Laptop => &self.laptop,
            BreakpointKey::LaptopL => &self.laptop_l,
            BreakpointKey::FourK => &self.four_k,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        BreakpointKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialBreakpointScale) -> Self {
        super::merge_fields!(self, overrides:
            mobile_s, mobile_m, mobile_l, tablet, laptop, laptop_l, four_k,
        );
        self
    }
}

impl Default for BreakpointScale {
    fn default() -> Self {
        Self {
            mobile_s: "320px".into(),
            mobile_m: "375px".into(),
            mobile_l: "425px".into(),
            tablet: "768px".into(),
            laptop: "1024px".into(),
            laptop_l: "1440px".into(),
            four_k: "2560px".into(),
        }
    }
}

/// Sparse breakpoint override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialBreakpointScale {
    pub mobile_s: Option<String>,
    pub mobile_m: Option<String>,
    pub mobile_l: Option<String>,
    pub tablet: Option<String>,
    pub laptop: Option<String>,
    pub laptop_l: Option<String>,
    #[serde(rename = "4k")]
    pub four_k: Option<String>,
}

/// Container width token keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ContainerKey {
    S,
    M,
    L,
    Xl,
}

impl ContainerKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [ContainerKey] {
        const KEYS: [ContainerKey; 4] = [
            ContainerKey::S,
            ContainerKey::M,
            ContainerKey::L,
            ContainerKey::Xl,
        ];
        &KEYS
    }
}

/// Content container max-widths.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerScale {
    pub s: String,
    pub m: String,
    pub l: String,
    pub xl: String,
}

impl ContainerScale {
    pub fn get(&self, key: ContainerKey) -> &str {
        match key {
            ContainerKey::S => &self.s,
            ContainerKey::M => &self.m,
            ContainerKey::L => &self.l,
            ContainerKey::Xl => &self.xl,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        ContainerKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialContainerScale) -> Self {
        super::merge_fields!(self, overrides: s, m, l, xl);
        self
    }
}

impl Default for ContainerScale {
    fn default() -> Self {
        Self {
            s: "640px".into(),
            m: "768px".into(),
            l: "1024px".into(),
            xl: "1280px".into(),
        }
    }
}

/// Sparse container override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialContainerScale {
    pub s: Option<String>,
    pub m: Option<String>,
    pub l: Option<String>,
    pub xl: Option<String>,
}

/// Z-index layer keys, ordered from content to topmost chrome.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZIndexKey {
    Base,
    Dropdown,
    Sticky,
    Fixed,
    Overlay,
    Modal,
    Popover,
    Tooltip,
    Toast,
}

impl ZIndexKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Dropdown => "dropdown",
            Self::Sticky => "sticky",
            Self::Fixed => "fixed",
            Self::Overlay => "overlay",
            Self::Modal => "modal",
            Self::Popover => "popover",
            Self::Tooltip => "tooltip",
            Self::Toast => "toast",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }

    pub fn all() -> &'static [ZIndexKey] {
        const KEYS: [ZIndexKey; 9] = [
            ZIndexKey::Base,
            ZIndexKey::Dropdown,
            ZIndexKey::Sticky,
            ZIndexKey::Fixed,
            ZIndexKey::Overlay,
            ZIndexKey::Modal,
            ZIndexKey::Popover,
            ZIndexKey::Tooltip,
            ZIndexKey::Toast,
        ];
        &KEYS
    }
}

/// Stacking layers.
#[derive(Clone, Debug, PartialEq)]
pub struct ZIndexScale {
    pub base: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub fixed: i32,
    pub overlay: i32,
    pub modal: i32,
    pub popover: i32,
    pub tooltip: i32,
    pub toast: i32,
}

impl ZIndexScale {
    pub fn get(&self, key: ZIndexKey) -> i32 {
        match key {
            ZIndexKey::Base => self.base,
            ZIndexKey::Dropdown => self.dropdown,
            ZIndexKey::Sticky => self.sticky,
            ZIndexKey::Fixed => self.fixed,
            ZIndexKey::Overlay => self.overlay,
            ZIndexKey::Modal => self.modal,
            ZIndexKey::Popover => self.popover,
            ZIndexKey::Tooltip => self.tooltip,
            ZIndexKey::Toast => self.toast,
        }
    }

    pub fn value_of(&self, name: &str) -> Option<i32> {
        ZIndexKey::from_name(name).map(|key| self.get(key))
    }

    pub fn merged(mut self, overrides: PartialZIndexScale) -> Self {
        super::merge_fields!(self, overrides:
            base, dropdown, sticky, fixed, overlay, modal, popover, tooltip, toast,
        );
        self
    }
}

impl Default for ZIndexScale {
    fn default() -> Self {
        Self {
            base: 0,
            dropdown: 100,
            sticky: 200,
            fixed: 300,
            overlay: 400,
            modal: 500,
            popover: 600,
            tooltip: 700,
            toast: 800,
        }
    }
}

/// Sparse z-index override.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialZIndexScale {
    pub base: Option<i32>,
    pub dropdown: Option<i32>,
    pub sticky: Option<i32>,
    pub fixed: Option<i32>,
    pub overlay: Option<i32>,
    pub modal: Option<i32>,
    pub popover: Option<i32>,
    pub tooltip: Option<i32>,
    pub toast: Option<i32>,
}
