//! Publishes the picker's accessibility description through AccessKit.
//!
//! egui fills a generic node for every widget; the calls here run after the
//! widget is drawn and overwrite role, name and state with what the view
//! model describes.

use egui::accesskit;

use crate::models::accessibility::{AccessibleNode, LiveRegion, Role};

fn accesskit_role(role: Role) -> accesskit::Role {
    match role {
        Role::Dialog => accesskit::Role::Dialog,
        Role::Heading => accesskit::Role::Heading,
        Role::Button => accesskit::Role::Button,
        Role::Grid => accesskit::Role::Grid,
        Role::ColumnHeader => accesskit::Role::ColumnHeader,
        Role::GridCell => accesskit::Role::Cell,
    }
}

fn accesskit_live(live: LiveRegion) -> Option<accesskit::Live> {
    match live {
        LiveRegion::Off => None,
        LiveRegion::Polite => Some(accesskit::Live::Polite),
    }
}

fn node_id(id: egui::Id) -> accesskit::NodeId {
    accesskit::NodeId::from(id.value())
}

/// Describe the widget behind `id`. `labelled_by` is the egui id of the
/// widget that names it, resolved by the caller from the node's string id.
pub(super) fn expose(
    ctx: &egui::Context,
    id: egui::Id,
    node: &AccessibleNode,
    labelled_by: Option<egui::Id>,
) {
    // None when AccessKit is inactive for this frame
    let _ = ctx.accesskit_node_builder(id, |builder| {
        builder.set_role(accesskit_role(node.role));
        builder.set_name(node.label.clone());
        if node.disabled {
            builder.set_disabled();
        } else {
            builder.clear_disabled();
        }
        if node.role == Role::GridCell {
            builder.set_selected(node.selected);
        }
        if node.modal {
            builder.set_modal();
        }
        if let Some(live) = accesskit_live(node.live) {
            builder.set_live(live);
        }
        if let Some(label_id) = labelled_by {
            builder.set_labelled_by(vec![node_id(label_id)]);
        }
    });
}
