use crate::audio::Chime;
use crate::config::{CHIME_SRC, TICK_MS};
use donut_timer::{Duration, TimerAction, TimerState};
use gloo_timers::callback::Interval;
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Current window dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

fn read_dimension(value: Result<JsValue, JsValue>, name: &str) -> f64 {
    match value.ok().and_then(|v| v.as_f64()) {
        Some(px) => px,
        None => {
            warn!("Could not read window {}", name);
            0.0
        }
    }
}

fn read_viewport() -> Viewport {
    let window = gloo_utils::window();
    Viewport {
        width: read_dimension(window.inner_width(), "width"),
        height: read_dimension(window.inner_height(), "height"),
    }
}

/// Tracks the window size, re-rendering on every `resize` event.
#[hook]
pub fn use_viewport() -> Viewport {
    let viewport = use_state(read_viewport);

    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn()>::new(move || viewport.set(read_viewport()));
            let window = gloo_utils::window();
            if let Err(e) =
                window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                warn!("Failed to watch window resize: {:?}", e);
            }
            move || {
                let _ = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
                drop(listener);
            }
        });
    }

    *viewport
}

/// The completion chime, loaded once per component. `None` if the browser refused it.
#[hook]
pub fn use_chime() -> Rc<Option<Chime>> {
    use_memo((), |_| match Chime::new(CHIME_SRC) {
        Ok(chime) => Some(chime),
        Err(e) => {
            warn!("Chime unavailable: {:?}", e);
            None
        }
    })
}

/// (Re)start the one-second tick. The previous interval is dropped, and with it
/// cancelled, before the new one is scheduled.
fn begin_countdown_interval(
    slot: &RefCell<Option<Interval>>,
    dispatcher: UseReducerDispatcher<TimerState>,
) {
    slot.borrow_mut().take();
    let interval = Interval::new(TICK_MS, move || dispatcher.dispatch(TimerAction::Tick));
    *slot.borrow_mut() = Some(interval);
    debug!("Countdown interval started");
}

/// Record `next` as the applied duration. False when the timer already runs on it,
/// as on mount where the reducer was built from the same value.
fn duration_changed(applied: &RefCell<Duration>, next: Duration) -> bool {
    let mut applied = applied.borrow_mut();
    if *applied == next {
        return false;
    }
    *applied = next;
    true
}

fn rewind(chime: &Option<Chime>) {
    if let Some(chime) = chime {
        chime.rewind();
    }
}

/// State and controls returned by [`use_countdown`].
#[derive(Clone)]
pub struct Countdown {
    pub state: UseReducerHandle<TimerState>,
    pub on_toggle: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Owns the timer state machine, its tick interval and the chime.
///
/// Every new `duration` stops the timer and resets it. The interval lives
/// as long as the calling component and is dropped on unmount.
#[hook]
pub fn use_countdown(duration: Duration) -> Countdown {
    let state = use_reducer(move || TimerState::new(duration));
    let applied = use_mut_ref(|| duration);
    let interval = use_mut_ref(|| None::<Interval>);
    let chime = use_chime();

    {
        let dispatcher = state.dispatcher();
        let interval = interval.clone();
        let chime = chime.clone();
        use_effect_with(duration, move |duration| {
            if duration_changed(&applied, *duration) {
                dispatcher.dispatch(TimerAction::SetDuration(*duration));
            }
            begin_countdown_interval(&interval, dispatcher.clone());
            rewind(&chime);
            move || {
                interval.borrow_mut().take();
            }
        });
    }

    {
        let chime = chime.clone();
        use_effect_with(state.chimes(), move |&count| {
            if count > 0 {
                if let Some(chime) = &*chime {
                    chime.play();
                }
            }
            || ()
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TimerAction::Toggle))
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        let interval = interval.clone();
        let chime = chime.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(TimerAction::Reset);
            begin_countdown_interval(&interval, dispatcher.clone());
            rewind(&chime);
        })
    };

    Countdown {
        state,
        on_toggle,
        on_reset,
    }
}
