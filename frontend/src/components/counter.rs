use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            CounterFrame::Running(v) | CounterFrame::Done(v) => v,
        }
    }
}

/// Counts from zero up to `target`, one fixed increment per redraw.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let frames = duration_ms as f64 / COUNTER_FRAME_MS as f64;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    /// Advances one redraw. Once `Done` is returned every later call
    /// returns `Done(target)` again.
    pub fn tick(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            self.finished = true;
            CounterFrame::Done(self.target)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Counting begins the first time this becomes true.
    pub start: bool,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let shown = use_state_eq(|| 0u64);

    {
        let shown = shown.clone();
        let (target, duration_ms) = (props.target, props.duration_ms);
        use_effect_with_deps(
            move |start| {
                let cancelled = Rc::new(Cell::new(false));
                if *start {
                    run_counter(CounterAnimation::new(target, duration_ms), shown, cancelled.clone());
                }
                move || cancelled.set(true)
            },
            props.start,
        );
    }

    html! {
        <span class="stat-number">{ format!("{}{}", *shown, props.suffix) }</span>
    }
}

/// Drives `animation` with requestAnimationFrame until it settles or is cancelled.
fn run_counter(mut animation: CounterAnimation, shown: UseStateHandle<u64>, cancelled: Rc<Cell<bool>>) {
    let Ok(window) = dom::window() else {
        return;
    };

    // The first frame is drawn synchronously, the rest on redraw ticks.
    let frame = animation.tick();
    shown.set(frame.value());
    if matches!(frame, CounterFrame::Done(_)) {
        return;
    }

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let tick_window = window.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled.get() {
            let _ = f.borrow_mut().take();
            return;
        }
        let frame = animation.tick();
        shown.set(frame.value());
        match frame {
            CounterFrame::Done(_) => {
                let _ = f.borrow_mut().take();
            }
            CounterFrame::Running(_) => {
                if let Some(next) = f.borrow().as_ref() {
                    let _ = tick_window.request_animation_frame(next.as_ref().unchecked_ref());
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(first.as_ref().unchecked_ref()) {
            log::warn!("{}", crate::error::SiteError::dom("request_animation_frame", e));
        }
    };
}
