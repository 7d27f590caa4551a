use std::rc::Rc;
use yew::Reducible;

use crate::model::GameEntry;

/// Which game, if any, is open in the player. Only one at a time; nothing is
/// remembered after closing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    Idle,
    Playing(GameEntry),
}

pub enum SelectionAction {
    Select(GameEntry),
    Close,
}

impl Selection {
    pub fn playing(&self) -> Option<&GameEntry> {
        match self {
            Selection::Idle => None,
            Selection::Playing(g) => Some(g),
        }
    }

    pub fn apply(&self, action: SelectionAction) -> Selection {
        match action {
            SelectionAction::Select(entry) => Selection::Playing(entry),
            SelectionAction::Close => Selection::Idle,
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Closing while idle keeps the same Rc so nothing re-renders.
        if matches!(action, SelectionAction::Close) && *self == Selection::Idle {
            return self;
        }
        Rc::new(self.apply(action))
    }
}
