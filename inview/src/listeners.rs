use alloc::vec::Vec;

use crate::{Host, Subscription};

/// The subscriptions a controller currently holds on its host.
///
/// This ledger is what makes listening idempotent: a subscription is registered with the host
/// only if it is not already held, and removed only if it is.
#[derive(Clone, Debug)]
pub(crate) struct ListenerSet<E> {
    active: Vec<Subscription<E>>,
}

impl<E: Clone + PartialEq> ListenerSet<E> {
    pub(crate) fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.active.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Subscription<E>> {
        self.active.iter()
    }

    pub(crate) fn add<H: Host<Element = E>>(&mut self, host: &mut H, sub: Subscription<E>) {
        if self.active.contains(&sub) {
            return;
        }
        itrace!(
            owner = sub.owner.get(),
            event = sub.event.as_str(),
            listener = ?sub.listener,
            "add_listener"
        );
        host.add_listener(&sub);
        self.active.push(sub);
    }

    pub(crate) fn remove<H: Host<Element = E>>(
        &mut self,
        host: &mut H,
        matches: impl Fn(&Subscription<E>) -> bool,
    ) {
        self.active.retain(|sub| {
            if !matches(sub) {
                return true;
            }
            itrace!(
                owner = sub.owner.get(),
                event = sub.event.as_str(),
                listener = ?sub.listener,
                "remove_listener"
            );
            host.remove_listener(sub);
            false
        });
    }

    pub(crate) fn clear<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.remove(host, |_| true);
    }
}
