//! Bindable layout properties

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property category a scope can admit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyGroup {
    /// Item spacing, counter-axis spacing and paddings
    Gap,
    /// Width and height
    Size,
    /// The four corner radii
    CornerRadius,
}

/// Node property that can reference a variable instead of a literal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindableProperty {
    ItemSpacing,
    CounterAxisSpacing,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Width,
    Height,
    TopLeftRadius,
    TopRightRadius,
    BottomLeftRadius,
    BottomRightRadius,
}

impl BindableProperty {
    /// All bindable properties, in evaluation order
    pub const ALL: [BindableProperty; 12] = [
        BindableProperty::ItemSpacing,
        BindableProperty::CounterAxisSpacing,
        BindableProperty::PaddingTop,
        BindableProperty::PaddingRight,
        BindableProperty::PaddingBottom,
        BindableProperty::PaddingLeft,
        BindableProperty::Width,
        BindableProperty::Height,
        BindableProperty::TopLeftRadius,
        BindableProperty::TopRightRadius,
        BindableProperty::BottomLeftRadius,
        BindableProperty::BottomRightRadius,
    ];

    pub const PADDINGS: [BindableProperty; 4] = [
        BindableProperty::PaddingTop,
        BindableProperty::PaddingRight,
        BindableProperty::PaddingBottom,
        BindableProperty::PaddingLeft,
    ];

    pub const SIZES: [BindableProperty; 2] = [BindableProperty::Width, BindableProperty::Height];

    pub const CORNERS: [BindableProperty; 4] = [
        BindableProperty::TopLeftRadius,
        BindableProperty::TopRightRadius,
        BindableProperty::BottomLeftRadius,
        BindableProperty::BottomRightRadius,
    ];

    pub fn group(self) -> PropertyGroup {
        match self {
            BindableProperty::ItemSpacing
            | BindableProperty::CounterAxisSpacing
            | BindableProperty::PaddingTop
            | BindableProperty::PaddingRight
            | BindableProperty::PaddingBottom
            | BindableProperty::PaddingLeft => PropertyGroup::Gap,
            BindableProperty::Width | BindableProperty::Height => PropertyGroup::Size,
            BindableProperty::TopLeftRadius
            | BindableProperty::TopRightRadius
            | BindableProperty::BottomLeftRadius
            | BindableProperty::BottomRightRadius => PropertyGroup::CornerRadius,
        }
    }

    /// Host field name
    pub fn as_str(self) -> &'static str {
        match self {
            BindableProperty::ItemSpacing => "itemSpacing",
            BindableProperty::CounterAxisSpacing => "counterAxisSpacing",
            BindableProperty::PaddingTop => "paddingTop",
            BindableProperty::PaddingRight => "paddingRight",
            BindableProperty::PaddingBottom => "paddingBottom",
            BindableProperty::PaddingLeft => "paddingLeft",
            BindableProperty::Width => "width",
            BindableProperty::Height => "height",
            BindableProperty::TopLeftRadius => "topLeftRadius",
            BindableProperty::TopRightRadius => "topRightRadius",
            BindableProperty::BottomLeftRadius => "bottomLeftRadius",
            BindableProperty::BottomRightRadius => "bottomRightRadius",
        }
    }
}

impl fmt::Display for BindableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
