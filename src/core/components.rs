//! Discord message components ("components v2") used to lay out bot answers.
//!
//! Discord tells node kinds apart with a numeric `type` field, so the tree is
//! serialized by hand rather than with a derived, string-tagged enum.

use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_repr::Serialize_repr;

/// Message flag switching a message to the components v2 layout.
pub const IS_COMPONENTS_V2: u32 = 1 << 15;
/// Message flag making an interaction answer visible to the caller only.
pub const EPHEMERAL: u32 = 1 << 6;

// Gold of the stars on adventofcode.com
pub const STAR_GOLD: u32 = 0xFFFF66;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum SeparatorSpacing {
    Small = 1,
    Large = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
enum ButtonStyle {
    Link = 5,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    ActionRow {
        components: Vec<Component>,
    },
    LinkButton {
        label: String,
        url: String,
    },
    TextDisplay {
        content: String,
    },
    Separator {
        divider: bool,
        spacing: SeparatorSpacing,
    },
    Container {
        accent_color: Option<u32>,
        components: Vec<Component>,
    },
}

impl Component {
    pub fn text(content: impl Into<String>) -> Self {
        Component::TextDisplay {
            content: content.into(),
        }
    }

    pub fn divider() -> Self {
        Component::Separator {
            divider: true,
            spacing: SeparatorSpacing::Small,
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Component::ActionRow {
            components: vec![Component::LinkButton {
                label: label.into(),
                url: url.into(),
            }],
        }
    }

    pub fn container(components: Vec<Component>) -> Self {
        Component::Container {
            accent_color: Some(STAR_GOLD),
            components,
        }
    }

    /// Discord component type id.
    pub fn kind(&self) -> u8 {
        match self {
            Component::ActionRow { .. } => 1,
            Component::LinkButton { .. } => 2,
            Component::TextDisplay { .. } => 10,
            Component::Separator { .. } => 14,
            Component::Container { .. } => 17,
        }
    }

    /// Text of every text display in the tree, depth first.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Component::TextDisplay { content } => vec![content.as_str()],
            Component::ActionRow { components } | Component::Container { components, .. } => {
                components.iter().flat_map(|c| c.texts()).collect()
            }
            _ => vec![],
        }
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind())?;
        match self {
            Component::ActionRow { components } => {
                map.serialize_entry("components", components)?;
            }
            Component::LinkButton { label, url } => {
                map.serialize_entry("style", &ButtonStyle::Link)?;
                map.serialize_entry("label", label)?;
                map.serialize_entry("url", url)?;
            }
            Component::TextDisplay { content } => {
                map.serialize_entry("content", content)?;
            }
            Component::Separator { divider, spacing } => {
                map.serialize_entry("divider", divider)?;
                map.serialize_entry("spacing", spacing)?;
            }
            Component::Container {
                accent_color,
                components,
            } => {
                if let Some(color) = accent_color {
                    map.serialize_entry("accent_color", color)?;
                }
                map.serialize_entry("components", components)?;
            }
        }
        map.end()
    }
}
