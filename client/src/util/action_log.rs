//! Debug logging for engine actions.

use canvas::engine::Action;

/// Log what an engine call changed; cursor and render hints are skipped.
pub fn log_actions(source: &str, actions: &[Action]) {
    for action in actions {
        match action {
            Action::ComponentCreated(c) => {
                log::debug!("{source}: created {} {} at ({}, {})", c.kind.as_str(), c.id, c.x, c.y);
            }
            Action::ComponentMoved { id, x, y } => log::trace!("{source}: moved {id} to ({x}, {y})"),
            Action::ComponentDeleted { id } => log::debug!("{source}: deleted {id}"),
            Action::SelectionChanged(Some(id)) => log::debug!("{source}: selected {id}"),
            Action::SelectionChanged(None) => log::debug!("{source}: selection cleared"),
            Action::Cleared => log::debug!("{source}: canvas cleared"),
            Action::SetCursor(_) | Action::RenderNeeded => {}
        }
    }
}
