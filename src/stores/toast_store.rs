// ============================================================================
// TOAST STORE - notifications currently on screen
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::Notification;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStore {
    next_id: u32,
    pub toasts: Vec<(u32, Notification)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

impl ToastStore {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(notification) => {
                self.toasts.push((self.next_id, notification));
                self.next_id = self.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => self.toasts.retain(|(toast_id, _)| *toast_id != id),
        }
    }
}

impl Reducible for ToastStore {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut store = ToastStore::default();
        store.apply(ToastAction::Push(Notification::success("one")));
        store.apply(ToastAction::Push(Notification::error("two")));
        let ids: Vec<u32> = store.toasts.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1]);

        store.apply(ToastAction::Dismiss(0));
        assert_eq!(store.toasts, vec![(1, Notification::error("two"))]);

        store.apply(ToastAction::Dismiss(7));
        assert_eq!(store.toasts.len(), 1);
    }
}
