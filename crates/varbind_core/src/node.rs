//! Scene node snapshots
//!
//! A [`SceneNode`] is an owned copy of the parts of a host node the linking
//! engine reads: type, auto-layout block, size, corner radii, the per-collection
//! mode table, host-inferred variables and current bindings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ids::{ModeId, NodeId, VariableId};
use crate::property::{BindableProperty, PropertyGroup};

/// Node type tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Vector,
    Line,
    Text,
    BooleanOperation,
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Component instances are opaque to the walk
    pub fn is_instance(self) -> bool {
        self == NodeKind::Instance
    }

    /// Node types that can carry an auto-layout block
    pub fn is_frame_like(self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet | NodeKind::Instance
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Grid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    #[default]
    NoWrap,
    Wrap,
}

/// Primary-axis distribution of children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Distribution of wrapped rows/columns along the counter axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlignContent {
    #[default]
    Auto,
    SpaceBetween,
}

/// Auto-layout properties of a frame-like node
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    pub layout_wrap: LayoutWrap,
    pub primary_axis_align_items: PrimaryAxisAlign,
    pub counter_axis_align_content: CounterAxisAlignContent,
    pub item_spacing: f64,
    /// Only present on wrapping layouts
    pub counter_axis_spacing: Option<f64>,
    pub padding_top: f64,
    pub padding_right: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
}

impl AutoLayout {
    pub fn is_active(&self) -> bool {
        self.layout_mode != LayoutMode::None
    }

    pub fn wraps(&self) -> bool {
        self.layout_wrap == LayoutWrap::Wrap
    }

    pub fn padding(&self, side: BindableProperty) -> Option<f64> {
        match side {
            BindableProperty::PaddingTop => Some(self.padding_top),
            BindableProperty::PaddingRight => Some(self.padding_right),
            BindableProperty::PaddingBottom => Some(self.padding_bottom),
            BindableProperty::PaddingLeft => Some(self.padding_left),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Four independent corner radii
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl CornerRadii {
    pub fn get(&self, corner: BindableProperty) -> Option<f64> {
        match corner {
            BindableProperty::TopLeftRadius => Some(self.top_left),
            BindableProperty::TopRightRadius => Some(self.top_right),
            BindableProperty::BottomLeftRadius => Some(self.bottom_left),
            BindableProperty::BottomRightRadius => Some(self.bottom_right),
            _ => None,
        }
    }
}

/// Corner radius as the host reports it: one number, or mixed per corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    Mixed(CornerRadii),
}

impl CornerRadius {
    pub fn corner(&self, corner: BindableProperty) -> Option<f64> {
        match self {
            CornerRadius::Uniform(radius) => {
                (corner.group() == PropertyGroup::CornerRadius).then_some(*radius)
            }
            CornerRadius::Mixed(radii) => radii.get(corner),
        }
    }
}

/// Owned snapshot of one host node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    /// Explicit mode per collection id, as resolved by the host
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub resolved_modes: IndexMap<String, ModeId>,
    /// Host-inferred candidate variables per property
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub inferred_variables: IndexMap<BindableProperty, Vec<VariableId>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub bound_variables: IndexMap<BindableProperty, VariableId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            layout: None,
            size: None,
            corner_radius: None,
            resolved_modes: IndexMap::new(),
            inferred_variables: IndexMap::new(),
            bound_variables: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Auto-layout block, only when auto-layout is active
    pub fn active_layout(&self) -> Option<&AutoLayout> {
        self.layout.as_ref().filter(|layout| layout.is_active())
    }

    /// Current literal value of a bindable property, if the node exposes it
    pub fn literal(&self, property: BindableProperty) -> Option<f64> {
        match property {
            BindableProperty::ItemSpacing => self.layout.as_ref().map(|l| l.item_spacing),
            BindableProperty::CounterAxisSpacing => {
                self.layout.as_ref().and_then(|l| l.counter_axis_spacing)
            }
            BindableProperty::PaddingTop
            | BindableProperty::PaddingRight
            | BindableProperty::PaddingBottom
            | BindableProperty::PaddingLeft => {
                self.layout.as_ref().and_then(|l| l.padding(property))
            }
            BindableProperty::Width => self.size.map(|s| s.width),
            BindableProperty::Height => self.size.map(|s| s.height),
            BindableProperty::TopLeftRadius
            | BindableProperty::TopRightRadius
            | BindableProperty::BottomLeftRadius
            | BindableProperty::BottomRightRadius => {
                self.corner_radius.and_then(|r| r.corner(property))
            }
        }
    }

    pub fn bound_variable(&self, property: BindableProperty) -> Option<&VariableId> {
        self.bound_variables.get(&property)
    }

    /// Explicit mode for a collection, matched by `matches` against the keys
    /// of the mode table in table order.
    pub fn explicit_mode<F>(&self, matches: F) -> Option<&ModeId>
    where
        F: Fn(&str) -> bool,
    {
        self.resolved_modes
            .iter()
            .find(|(collection_id, _)| matches(collection_id))
            .map(|(_, mode)| mode)
    }
}
