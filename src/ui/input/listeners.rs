//! Scoped Input-Listener: jede Event-Art ist nur aktiv, solange ein Guard lebt.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Event-Arten, die der Viewport weiterleitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Primärklick im Viewport
    Click,
    /// Mausbewegung über dem Viewport
    PointerMove,
    /// Losgelassene Taste
    KeyUp,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    active: Vec<(u64, ListenerKind)>,
}

/// Registry aller aktiven Listener. Klone teilen denselben Zustand.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ListenerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet einen Listener an. Er bleibt aktiv, bis der Guard gedroppt wird.
    pub fn subscribe(&self, kind: ListenerKind) -> ListenerGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.active.push((id, kind));
        log::debug!("Listener {} angemeldet ({:?})", id, kind);

        ListenerGuard {
            id,
            kind,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Gibt an, ob mindestens ein Listener dieser Art aktiv ist.
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.count(kind) > 0
    }

    /// Anzahl aktiver Listener einer Art.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .active
            .iter()
            .filter(|(_, k)| *k == kind)
            .count()
    }

    /// Anzahl aller aktiven Listener.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

/// Hält einen Listener am Leben. Beim Drop wird er abgemeldet.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    kind: ListenerKind,
    registry: Weak<RefCell<RegistryInner>>,
}

impl ListenerGuard {
    /// Event-Art dieses Listeners.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Registry bereits weg: nichts mehr abzumelden
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut inner = registry.borrow_mut();
        inner.active.retain(|(id, _)| *id != self.id);
        log::debug!("Listener {} abgemeldet ({:?})", self.id, self.kind);
    }
}
