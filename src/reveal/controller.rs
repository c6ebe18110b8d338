//! DOM side of the entrance animations: one controller per section, owning a
//! window scroll listener and the timers for an in-flight timeline.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::timeline::Timeline;
use super::trigger::{Phase, RevealTrigger};

struct Inner {
    trigger: RevealTrigger,
    timeline: Timeline,
    root: Option<Element>,
    scroll_callback: Option<Closure<dyn FnMut()>>,
    timers: Vec<Timeout>,
}

/// Owns the scroll observation and playback for one section. Created in the
/// section's mount effect, disposed in the effect destructor.
pub struct RevealController {
    inner: Rc<RefCell<Inner>>,
}

impl RevealController {
    /// Applies every group's from-state, starts observing scroll position and
    /// checks once immediately so sections already in view fire on mount.
    ///
    /// A `None` root (section torn down mid-setup) produces an inert
    /// controller: nothing is observed and the timeline can never play.
    pub fn arm(
        root: Option<Element>,
        timeline: Timeline,
        threshold: f64,
        fire_once: bool,
    ) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            trigger: RevealTrigger::new(threshold, fire_once),
            timeline,
            root,
            scroll_callback: None,
            timers: Vec::new(),
        }));
        let controller = Self {
            inner: inner.clone(),
        };

        let root = match inner.borrow().root.clone() {
            Some(root) => root,
            None => return controller,
        };

        {
            let mut state = inner.borrow_mut();
            apply_initial(&root, &state.timeline);
            state.trigger.arm();
        }

        let listener_state = inner.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            RevealController::check(&listener_state);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            );
        }
        inner.borrow_mut().scroll_callback = Some(scroll_callback);

        // Initial check
        RevealController::check(&inner);

        controller
    }

    fn check(inner: &Rc<RefCell<Inner>>) {
        let fire = {
            let state = inner.borrow();
            let root = match state.root.as_ref() {
                Some(root) => root,
                None => return,
            };
            let viewport = match web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
            {
                Some(height) => height,
                None => return,
            };
            let top = root.get_bounding_client_rect().top();
            state.trigger.should_fire(top, viewport)
        };
        if fire {
            let mut state = inner.borrow_mut();
            if state.trigger.fire() {
                play(&mut state);
            }
        }
    }

    /// Cancels pending timers, detaches the scroll listener and goes
    /// permanently quiet. Safe to call more than once.
    pub fn dispose(&self) {
        let mut state = self.inner.borrow_mut();
        if state.trigger.phase() == Phase::Disposed {
            return;
        }
        state.trigger.dispose();
        state.timers.clear();
        if let Some(callback) = state.scroll_callback.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

fn selector(tag: &str) -> String {
    format!("[data-reveal=\"{}\"]", tag)
}

fn elements(root: &Element, tag: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(nodes) = root.query_selector_all(&selector(tag)) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                out.push(element);
            }
        }
    }
    out
}

fn apply_initial(root: &Element, timeline: &Timeline) {
    for group in &timeline.groups {
        for element in elements(root, group.tag) {
            let _ = element.set_attribute("style", &group.from.css());
        }
    }
}

fn play(state: &mut Inner) {
    let root = match state.root.as_ref() {
        Some(root) => root,
        None => return,
    };
    let targets: Vec<Vec<Element>> = state
        .timeline
        .groups
        .iter()
        .map(|group| elements(root, group.tag))
        .collect();
    let counts: Vec<usize> = targets.iter().map(|list| list.len()).collect();
    let starts = state.timeline.schedule(&counts);
    debug!("reveal firing: {} groups", state.timeline.groups.len());

    for (group_index, group) in state.timeline.groups.iter().enumerate() {
        let final_css = format!(
            "{} transition: all {}s {};",
            group.to.css(),
            group.duration,
            group.easing.css()
        );
        for (index, element) in targets[group_index].iter().enumerate() {
            let start = state.timeline.element_start(&starts, group_index, index);
            let element = element.clone();
            let css = final_css.clone();
            let timer = Timeout::new((start * 1000.0) as u32, move || {
                let _ = element.set_attribute("style", &css);
            });
            state.timers.push(timer);
        }
    }
}
