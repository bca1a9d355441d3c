//! Scope matching
//!
//! Decides which node properties a variable may be compared against, based
//! on the variable's scopes and the node's layout:
//!
//! | Scope                     | Properties                                    |
//! |---------------------------|-----------------------------------------------|
//! | `GAP` / `ALL_SCOPES`      | item spacing, counter-axis spacing, paddings  |
//! | `WIDTH_HEIGHT` / `ALL_SCOPES` | width, height                             |
//! | `CORNER_RADIUS` / `ALL_SCOPES` | corner radii                             |
//!
//! Gap properties are only proposed on frame-like nodes with active
//! auto-layout. Spacing distributed by `SPACE_BETWEEN` is computed by the
//! host and is never proposed.

use smallvec::{smallvec, SmallVec};
use varbind_core::{
    BindableProperty, CornerRadius, CounterAxisAlignContent, PrimaryAxisAlign, PropertyGroup,
    SceneNode, Variable,
};

/// Properties a single match rewrites
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTarget {
    Property(BindableProperty),
    /// A uniform corner radius: all four corners at once
    AllCorners,
}

impl MatchTarget {
    pub fn properties(self) -> SmallVec<[BindableProperty; 4]> {
        match self {
            MatchTarget::Property(property) => smallvec![property],
            MatchTarget::AllCorners => SmallVec::from_slice(&BindableProperty::CORNERS),
        }
    }
}

/// A node literal to compare against a variable's value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proposal {
    pub target: MatchTarget,
    pub literal: f64,
}

impl Proposal {
    fn property(property: BindableProperty, literal: f64) -> Self {
        Self {
            target: MatchTarget::Property(property),
            literal,
        }
    }
}

/// Proposals for `variable` on `node`, in property order
pub fn propose_matches(node: &SceneNode, variable: &Variable) -> SmallVec<[Proposal; 12]> {
    let mut proposals = SmallVec::new();

    if variable.admits(PropertyGroup::Gap) {
        propose_gaps(node, &mut proposals);
    }

    if variable.admits(PropertyGroup::Size) {
        for property in BindableProperty::SIZES {
            if let Some(literal) = node.literal(property) {
                proposals.push(Proposal::property(property, literal));
            }
        }
    }

    if variable.admits(PropertyGroup::CornerRadius) {
        match node.corner_radius {
            Some(CornerRadius::Uniform(radius)) => proposals.push(Proposal {
                target: MatchTarget::AllCorners,
                literal: radius,
            }),
            Some(CornerRadius::Mixed(radii)) => {
                for corner in BindableProperty::CORNERS {
                    if let Some(literal) = radii.get(corner) {
                        proposals.push(Proposal::property(corner, literal));
                    }
                }
            }
            None => {}
        }
    }

    proposals
}

fn propose_gaps(node: &SceneNode, proposals: &mut SmallVec<[Proposal; 12]>) {
    if !node.kind.is_frame_like() {
        return;
    }
    let Some(layout) = node.active_layout() else {
        return;
    };

    if layout.primary_axis_align_items != PrimaryAxisAlign::SpaceBetween {
        proposals.push(Proposal::property(
            BindableProperty::ItemSpacing,
            layout.item_spacing,
        ));
    }

    if layout.wraps() && layout.counter_axis_align_content != CounterAxisAlignContent::SpaceBetween
    {
        if let Some(spacing) = layout.counter_axis_spacing {
            proposals.push(Proposal::property(
                BindableProperty::CounterAxisSpacing,
                spacing,
            ));
        }
    }

    for side in BindableProperty::PADDINGS {
        if let Some(padding) = layout.padding(side) {
            proposals.push(Proposal::property(side, padding));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varbind_core::{
        AutoLayout, CornerRadii, LayoutMode, LayoutWrap, NodeKind, Size, VariableId,
        VariableScope, VariableType,
    };

    fn variable(scopes: Vec<VariableScope>) -> Variable {
        Variable {
            id: VariableId::new("VariableID:1:1"),
            name: "token".into(),
            key: String::new(),
            variable_collection_id: "VariableCollectionId:1:0".into(),
            resolved_type: VariableType::Float,
            scopes,
            values_by_mode: Default::default(),
            remote: false,
        }
    }

    fn auto_layout_frame(layout: AutoLayout) -> SceneNode {
        let mut node = SceneNode::new("1:2", "Stack", NodeKind::Frame);
        node.layout = Some(layout);
        node.size = Some(Size {
            width: 320.0,
            height: 48.0,
        });
        node
    }

    fn targets(proposals: &[Proposal]) -> Vec<MatchTarget> {
        proposals.iter().map(|p| p.target).collect()
    }

    #[test]
    fn test_gap_scope_proposes_spacing_and_paddings() {
        let node = auto_layout_frame(AutoLayout {
            layout_mode: LayoutMode::Horizontal,
            item_spacing: 8.0,
            padding_left: 16.0,
            ..Default::default()
        });
        let proposals = propose_matches(&node, &variable(vec![VariableScope::Gap]));

        assert_eq!(
            targets(&proposals),
            vec![
                MatchTarget::Property(BindableProperty::ItemSpacing),
                MatchTarget::Property(BindableProperty::PaddingTop),
                MatchTarget::Property(BindableProperty::PaddingRight),
                MatchTarget::Property(BindableProperty::PaddingBottom),
                MatchTarget::Property(BindableProperty::PaddingLeft),
            ]
        );
        assert_eq!(proposals[4].literal, 16.0);
    }

    #[test]
    fn test_space_between_suppresses_item_spacing() {
        let node = auto_layout_frame(AutoLayout {
            layout_mode: LayoutMode::Horizontal,
            primary_axis_align_items: PrimaryAxisAlign::SpaceBetween,
            item_spacing: 8.0,
            ..Default::default()
        });
        let proposals = propose_matches(&node, &variable(vec![VariableScope::Gap]));
        assert!(!targets(&proposals)
            .contains(&MatchTarget::Property(BindableProperty::ItemSpacing)));
    }

    #[test]
    fn test_counter_axis_spacing_requires_wrap() {
        let mut layout = AutoLayout {
            layout_mode: LayoutMode::Horizontal,
            counter_axis_spacing: Some(12.0),
            ..Default::default()
        };
        let counter = MatchTarget::Property(BindableProperty::CounterAxisSpacing);

        let node = auto_layout_frame(layout.clone());
        assert!(!targets(&propose_matches(&node, &variable(vec![VariableScope::Gap])))
            .contains(&counter));

        layout.layout_wrap = LayoutWrap::Wrap;
        let node = auto_layout_frame(layout.clone());
        assert!(targets(&propose_matches(&node, &variable(vec![VariableScope::Gap])))
            .contains(&counter));

        layout.counter_axis_align_content = CounterAxisAlignContent::SpaceBetween;
        let node = auto_layout_frame(layout);
        assert!(!targets(&propose_matches(&node, &variable(vec![VariableScope::Gap])))
            .contains(&counter));
    }

    #[test]
    fn test_gap_needs_active_auto_layout() {
        let node = auto_layout_frame(AutoLayout {
            layout_mode: LayoutMode::None,
            item_spacing: 8.0,
            ..Default::default()
        });
        let proposals = propose_matches(&node, &variable(vec![VariableScope::Gap]));
        assert!(proposals.is_empty());
    }

    #[test]
    fn test_width_height_scope() {
        let node = auto_layout_frame(AutoLayout::default());
        let proposals = propose_matches(&node, &variable(vec![VariableScope::WidthHeight]));
        assert_eq!(
            targets(&proposals),
            vec![
                MatchTarget::Property(BindableProperty::Width),
                MatchTarget::Property(BindableProperty::Height),
            ]
        );
    }

    #[test]
    fn test_uniform_radius_is_one_proposal() {
        let mut node = SceneNode::new("1:3", "Button", NodeKind::Rectangle);
        node.corner_radius = Some(CornerRadius::Uniform(6.0));
        let proposals = propose_matches(&node, &variable(vec![VariableScope::CornerRadius]));
        assert_eq!(targets(&proposals), vec![MatchTarget::AllCorners]);
        assert_eq!(MatchTarget::AllCorners.properties().len(), 4);
    }

    #[test]
    fn test_mixed_radii_are_independent() {
        let mut node = SceneNode::new("1:3", "Tab", NodeKind::Rectangle);
        node.corner_radius = Some(CornerRadius::Mixed(CornerRadii {
            top_left: 6.0,
            top_right: 6.0,
            bottom_left: 0.0,
            bottom_right: 0.0,
        }));
        let proposals = propose_matches(&node, &variable(vec![VariableScope::CornerRadius]));
        assert_eq!(proposals.len(), 4);
        assert!(proposals
            .iter()
            .all(|p| matches!(p.target, MatchTarget::Property(_))));
    }

    #[test]
    fn test_unrelated_scope_proposes_nothing() {
        let mut node = auto_layout_frame(AutoLayout {
            layout_mode: LayoutMode::Vertical,
            ..Default::default()
        });
        node.corner_radius = Some(CornerRadius::Uniform(4.0));
        let proposals = propose_matches(&node, &variable(vec![VariableScope::FontSize]));
        assert!(proposals.is_empty());
    }

    #[test]
    fn test_all_scopes_covers_every_group() {
        let mut node = auto_layout_frame(AutoLayout {
            layout_mode: LayoutMode::Vertical,
            ..Default::default()
        });
        node.corner_radius = Some(CornerRadius::Uniform(4.0));
        let proposals = propose_matches(&node, &variable(vec![VariableScope::AllScopes]));
        // item spacing, 4 paddings, width, height, all corners
        assert_eq!(proposals.len(), 8);
    }
}
