use crate::presentation::view_models::{ClickAction, Node};
use crate::{Error, Result};

use super::Navigator;

impl Node {
    /// Deliver a click on the node at `target`, a child-index path from this
    /// node, bubbling from the target up to this node.
    ///
    /// Returns how many handlers fired.
    pub fn dispatch_click(&self, target: &[usize], navigator: &dyn Navigator) -> Result<usize> {
        let mut chain = vec![self];
        let mut current = self;
        for (depth, &index) in target.iter().enumerate() {
            current = current.children().get(index).ok_or_else(|| {
                Error::InvalidTarget(format!(
                    "no child {} at depth {} of path {:?}",
                    index, depth, target
                ))
            })?;
            chain.push(current);
        }

        let mut fired = 0;
        for node in chain.iter().rev() {
            if let Some(action) = node.on_click() {
                run_action(action, navigator);
                fired += 1;
            }
        }

        tracing::debug!(path = ?target, fired, "click dispatched");
        Ok(fired)
    }

    /// Click the first clickable region, if any.
    pub fn activate(&self, navigator: &dyn Navigator) -> Result<usize> {
        match self.first_clickable() {
            Some(path) => self.dispatch_click(&path, navigator),
            None => Ok(0),
        }
    }
}

fn run_action(action: &ClickAction, navigator: &dyn Navigator) {
    match action {
        ClickAction::Navigate(request) => navigator.navigate(request),
    }
}
