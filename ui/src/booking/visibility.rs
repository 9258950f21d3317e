//! One-way "has this element been seen" signal.
//!
//! In the browser the mounted element is watched by an `IntersectionObserver`
//! with the requested root margin; the observer disconnects after the first
//! hit and is dropped with the component. Native renderers have no
//! viewport to observe, so the element counts as seen once it is mounted.

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use tracing::warn;

#[derive(Clone, Copy)]
pub struct SeenProbe {
    seen: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    margin: Signal<String>,
    #[cfg(target_arch = "wasm32")]
    observer: Signal<Option<observer::SeenObserver>>,
}

pub fn use_seen(margin: &str) -> SeenProbe {
    let seen = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    {
        let margin_value = margin.to_string();
        SeenProbe {
            seen,
            margin: use_signal(move || margin_value),
            observer: use_signal(|| None),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = margin;
        SeenProbe { seen }
    }
}

impl SeenProbe {
    /// Current reading. Subscribes the caller.
    pub fn get(&self) -> bool {
        (self.seen)()
    }

    /// Hook for the watched element's `onmounted`.
    pub fn attach(&self, evt: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
                warn!("mounted node is not a DOM element; treating it as seen");
                self.mark_seen();
                return;
            };
            let mut seen = self.seen;
            let margin = self.margin.peek().clone();
            match observer::SeenObserver::attach(&element, &margin, move || seen.set(true)) {
                Ok(watcher) => {
                    let mut slot = self.observer;
                    slot.set(Some(watcher));
                }
                Err(err) => {
                    warn!(?err, "IntersectionObserver unavailable; treating element as seen");
                    self.mark_seen();
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = evt;
            self.mark_seen();
        }
    }

    fn mark_seen(&self) {
        let mut seen = self.seen;
        if !*seen.peek() {
            seen.set(true);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod observer {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    pub struct SeenObserver {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl SeenObserver {
        pub fn attach(
            element: &Element,
            margin: &str,
            mut on_seen: impl FnMut() + 'static,
        ) -> Result<Self, JsValue> {
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let hit = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|e| e.is_intersecting())
                            .unwrap_or(false)
                    });
                    if hit {
                        observer.disconnect();
                        on_seen();
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_root_margin(margin);
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for SeenObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}
