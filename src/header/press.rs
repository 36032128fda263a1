//! Outside-press observation
//!
//! A menu closes when the pointer goes down anywhere outside its region.
//! The document-wide listener is acquired as a [`Subscription`] and
//! released exactly once, either explicitly or when the subscription is
//! dropped, so a torn-down header never receives another press.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The set of elements a menu owns (trigger + panel)
pub trait Region {
    type Target: ?Sized;

    /// Whether `target` lies inside the region.
    ///
    /// `None` means the region is not mounted yet; callers skip the event.
    fn contains(&self, target: &Self::Target) -> Option<bool>;
}

/// Source of pointer-press events for the whole page
pub trait PressSource {
    type Target: ?Sized;

    /// Register `handler` for every press until the subscription is released
    fn subscribe(&self, handler: Box<dyn FnMut(&Self::Target)>) -> Subscription;
}

/// Handle to a registered listener
#[must_use = "dropping a Subscription releases the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the listener now. Later calls and the drop are no-ops.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

type Handler<T> = Rc<RefCell<Box<dyn FnMut(&T)>>>;

struct BusInner<T: ?Sized> {
    next_id: u64,
    listeners: Vec<(u64, Handler<T>)>,
}

/// In-process press source.
///
/// Handlers may release subscriptions (their own included) while a press
/// is being dispatched; a press is delivered to the listeners registered
/// when it started.
pub struct PressBus<T: ?Sized> {
    inner: Rc<RefCell<BusInner<T>>>,
}

impl<T: ?Sized + 'static> PressBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Deliver a press on `target` to every listener
    pub fn dispatch(&self, target: &T) {
        let snapshot: Vec<Handler<T>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        for handler in snapshot {
            (handler.borrow_mut())(target);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl<T: ?Sized + 'static> Default for PressBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> PressSource for PressBus<T> {
    type Target = T;

    fn subscribe(&self, handler: Box<dyn FnMut(&T)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(RefCell::new(handler))));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

/// Attach one listener that reports, for every press, whether it landed
/// inside `region` (`None` while the region is unmounted).
/// [`DismissibleMenu::observe_press`](super::menu::DismissibleMenu::observe_press)
/// is the usual receiver.
pub fn observe_presses<S, R>(
    source: &S,
    region: R,
    mut on_press: impl FnMut(Option<bool>) + 'static,
) -> Subscription
where
    S: PressSource,
    R: Region<Target = S::Target> + 'static,
{
    tracing::debug!("Outside-press observer attached");
    let listener = source.subscribe(Box::new(move |target| {
        on_press(region.contains(target));
    }));

    Subscription::new(move || {
        drop(listener);
        tracing::debug!("Outside-press observer released");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Element ids; the region owns a fixed set of them
    struct IdRegion {
        mounted: Rc<Cell<bool>>,
        ids: Vec<u32>,
    }

    impl Region for IdRegion {
        type Target = u32;

        fn contains(&self, target: &u32) -> Option<bool> {
            self.mounted.get().then(|| self.ids.contains(target))
        }
    }

    fn region(ids: &[u32]) -> (IdRegion, Rc<Cell<bool>>) {
        let mounted = Rc::new(Cell::new(true));
        (
            IdRegion {
                mounted: Rc::clone(&mounted),
                ids: ids.to_vec(),
            },
            mounted,
        )
    }

    #[test]
    fn test_subscription_releases_once() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let mut sub = Subscription::new(move || c.set(c.get() + 1));

        assert!(sub.is_active());
        sub.release();
        sub.release();
        drop(sub);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_bus_dispatch_and_release() {
        let bus = PressBus::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = Rc::clone(&seen);
        let sub = bus.subscribe(Box::new(move |t| s.borrow_mut().push(*t)));
        assert_eq!(bus.listener_count(), 1);

        bus.dispatch(&7);
        drop(sub);
        bus.dispatch(&8);

        assert_eq!(*seen.borrow(), vec![7]);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_handler_may_release_during_dispatch() {
        let bus = PressBus::<u32>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let s = Rc::clone(&slot);
        let sub = bus.subscribe(Box::new(move |_| {
            s.borrow_mut().take();
        }));
        *slot.borrow_mut() = Some(sub);

        bus.dispatch(&1);
        assert_eq!(bus.listener_count(), 0);
    }

    fn recorder() -> (Rc<RefCell<Vec<Option<bool>>>>, impl FnMut(Option<bool>)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        (seen, move |inside| s.borrow_mut().push(inside))
    }

    #[test]
    fn test_observer_reports_region_answer() {
        let bus = PressBus::<u32>::new();
        let (region, _) = region(&[1, 2]);
        let (seen, on_press) = recorder();

        let _sub = observe_presses(&bus, region, on_press);

        bus.dispatch(&1);
        bus.dispatch(&99);
        bus.dispatch(&2);
        assert_eq!(*seen.borrow(), vec![Some(true), Some(false), Some(true)]);
    }

    #[test]
    fn test_unmounted_region_reports_none() {
        let bus = PressBus::<u32>::new();
        let (region, mounted) = region(&[1]);
        let (seen, on_press) = recorder();

        let _sub = observe_presses(&bus, region, on_press);

        mounted.set(false);
        bus.dispatch(&99);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn test_observer_detaches_on_drop() {
        let bus = PressBus::<u32>::new();
        let (region, _) = region(&[1]);
        let (seen, on_press) = recorder();

        let sub = observe_presses(&bus, region, on_press);
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);

        bus.dispatch(&99);
        assert!(seen.borrow().is_empty());
    }
}
