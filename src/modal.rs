use std::rc::Rc;

use crate::problems::{ProblemRegistry, ProblemStatement};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Rc<ProblemStatement>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open(String),
    Close,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn shown(&self) -> Option<&ProblemStatement> {
        match self {
            Self::Open(record) => Some(record.as_ref()),
            Self::Closed => None,
        }
    }

    /// Next state for `action`, or `None` when the action leaves the dialog
    /// untouched: an unknown key, or closing a dialog that is already closed.
    pub fn transition(&self, registry: &ProblemRegistry, action: &ModalAction) -> Option<Self> {
        match action {
            ModalAction::Open(key) => {
                let record = registry.get(key)?;
                match self {
                    Self::Open(current) if Rc::ptr_eq(current, record) => None,
                    _ => Some(Self::Open(Rc::clone(record))),
                }
            }
            ModalAction::Close => self.is_open().then_some(Self::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProblemRegistry {
        ProblemRegistry::bundled().expect("bundled data parses")
    }

    #[test]
    fn open_known_key_shows_record_fields() {
        let registry = registry();
        let next = ModalState::Closed
            .transition(&registry, &ModalAction::Open("NH-SJC-001".to_string()))
            .expect("known key opens the dialog");

        assert!(next.is_open());
        let shown = next.shown().expect("open dialog shows a record");
        assert_eq!(shown.id, "NH-SJC-PS-001");
        assert_eq!(shown.domain, "Gen AI for Business Applications");
        assert_eq!(
            shown.problem_text,
            registry.get("NH-SJC-001").expect("record").problem_text
        );
    }

    #[test]
    fn open_unknown_key_stays_closed() {
        let registry = registry();
        let next = ModalState::Closed.transition(&registry, &ModalAction::Open("NH-SJC-999".to_string()));

        assert_eq!(next, None);
    }

    #[test]
    fn open_with_padded_key_stays_closed() {
        let registry = registry();

        for key in [" NH-SJC-001\n", "NH-SJC-001 ", "nh-sjc-001"] {
            let next = ModalState::Closed.transition(&registry, &ModalAction::Open(key.to_string()));
            assert_eq!(next, None, "{key:?} is not a stored identifier");
        }
    }

    #[test]
    fn open_unknown_key_keeps_current_record() {
        let registry = registry();
        let open = ModalState::Closed
            .transition(&registry, &ModalAction::Open("NH-SJC-004".to_string()))
            .expect("known key opens");

        assert_eq!(open.transition(&registry, &ModalAction::Open("bogus".to_string())), None);
        assert_eq!(open.shown().map(|record| record.key.as_str()), Some("NH-SJC-004"));
    }

    #[test]
    fn open_while_open_switches_record() {
        let registry = registry();
        let first = ModalState::Closed
            .transition(&registry, &ModalAction::Open("NH-SJC-001".to_string()))
            .expect("known key opens");
        let second = first
            .transition(&registry, &ModalAction::Open("NH-SJC-013".to_string()))
            .expect("other key replaces the record");

        assert_eq!(second.shown().map(|record| record.id.as_str()), Some("NH-SJC-PS-013"));
    }

    #[test]
    fn close_from_open_and_closed() {
        let registry = registry();
        let open = ModalState::Closed
            .transition(&registry, &ModalAction::Open("NH-SJC-002".to_string()))
            .expect("known key opens");

        assert_eq!(open.transition(&registry, &ModalAction::Close), Some(ModalState::Closed));
        assert_eq!(ModalState::Closed.transition(&registry, &ModalAction::Close), None);
    }
}
