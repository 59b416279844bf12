//! Yew view components for the donut timer UI.
//!
//! `CountdownTimer` owns the timer through [`use_countdown`]; the settings
//! components are stateless and render from props.

use crate::config::*;
use crate::hooks::{use_countdown, use_viewport};
use crate::utils::{parse_segment, parse_theme_index, TIME_SEGMENT_OPTIONS};
use donut_timer::geometry::{
    donut_view_box, font_size, g_transform, radius, set_countdown_coords, set_play_coords,
    set_reset_coords, svg_bounds, Coords, DonutArc,
};
use donut_timer::theme::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, THEMES};
use donut_timer::{Duration, TimeUnit};
use log::{error, warn};
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;

/// Width and height of a rendered element, zero if it is not mounted yet.
fn measure(node: &NodeRef) -> (f64, f64) {
    node.cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            (rect.width(), rect.height())
        })
        .unwrap_or((0.0, 0.0))
}

#[derive(Debug, Clone, PartialEq, Default)]
struct IconCoords {
    countdown: Coords,
    reset: Coords,
    play: Coords,
}

impl IconCoords {
    /// Placement before anything is measured: icons are one font size square.
    fn estimate(radius: f64) -> Self {
        let icon = radius / 5.0;
        IconCoords {
            countdown: set_countdown_coords(radius, icon),
            reset: set_reset_coords(radius, icon, icon),
            play: set_play_coords(radius, icon),
        }
    }
}

/// One shape inside an icon group. Polygons are filled, paths are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Polygon(&'static str),
    Path(&'static str),
}

/// Circular arrow: arrowhead, leading arc, trailing arcs, hub.
const RESET_GLYPH: [&[Shape]; 4] = [
    &[Shape::Polygon("50,0 70,15 50,30")],
    &[Shape::Path("M50,15 A35,35 0 0 1 85,50")],
    &[
        Shape::Path("M85,50 A35,35 0 0 1 50,85"),
        Shape::Path("M50,85 A35,35 0 0 1 15,50"),
    ],
    &[Shape::Polygon("44,44 56,44 56,56 44,56")],
];

fn reset_glyph(fg: &AttrValue) -> Html {
    RESET_GLYPH
        .iter()
        .map(|group| {
            html! {
                <g>
                    { group.iter().map(|shape| match *shape {
                        Shape::Polygon(points) => html! { <polygon points={points} /> },
                        Shape::Path(d) => html! {
                            <path d={d} fill="none" stroke={fg.clone()} stroke-width="10" />
                        },
                    }).collect::<Html>() }
                </g>
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    #[prop_or(AttrValue::Static(DEFAULT_FOREGROUND))]
    pub foreground_color: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_BACKGROUND))]
    pub background_color: AttrValue,
}

/// Donut progress ring with the remaining time and play/pause/reset controls.
#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let duration = match Duration::new(props.hours, props.minutes, props.seconds) {
        Ok(d) => d,
        Err(e) => {
            error!("Rejected timer duration: {}", e);
            Duration::ZERO
        }
    };

    let viewport = use_viewport();
    let countdown = use_countdown(duration);
    let state = &*countdown.state;

    let bounds = svg_bounds(viewport.width, viewport.height);
    let radius = radius(bounds);
    let font_size = font_size(radius);
    let arc = DonutArc::for_radius(radius);

    let text_ref = use_node_ref();
    let reset_ref = use_node_ref();
    let play_ref = use_node_ref();
    let coords = use_state(|| IconCoords::estimate(radius));

    // Re-place the label and icons whenever the ring changes size.
    {
        let coords = coords.clone();
        let text_ref = text_ref.clone();
        let reset_ref = reset_ref.clone();
        let play_ref = play_ref.clone();
        use_effect_with(radius, move |&radius| {
            let (_, text_height) = measure(&text_ref);
            let (reset_width, reset_height) = measure(&reset_ref);
            let (_, play_height) = measure(&play_ref);
            coords.set(IconCoords {
                countdown: set_countdown_coords(radius, text_height),
                reset: set_reset_coords(radius, reset_width, reset_height),
                play: set_play_coords(radius, play_height),
            });
            || ()
        });
    }

    let fg = props.foreground_color.clone();
    let running = state.is_running();

    html! {
        <div id="timer" style={format!("background-color: {};", props.background_color)}>
            <svg id="donut"
                width="100%"
                height="100%"
                viewBox={donut_view_box(bounds)}
                preserveAspectRatio="xMinYMin meet"
            >
                <g transform={g_transform(radius)}>
                    <path id="countdown-path" fill={fg.clone()} d={arc.path(state.path_end_angle())} />
                </g>
                <text id="countdown-text"
                    ref={text_ref}
                    x={coords.countdown.x.clone()}
                    y={coords.countdown.y.clone()}
                    text-anchor="middle"
                    fill={fg.clone()}
                    style={format!("font-size: {};", font_size)}
                >
                    { state.time_readable() }
                </text>
                <svg id="play-pause"
                    ref={play_ref}
                    class="control"
                    x={coords.play.x.clone()}
                    y={coords.play.y.clone()}
                    viewBox={ICON_VIEW_BOX}
                    width={font_size.clone()}
                    height={font_size.clone()}
                    fill={fg.clone()}
                    onclick={countdown.on_toggle.clone()}
                >
                    <rect class="opacity-0" width="100%" height="100%" />
                    <g visibility={if running { "hidden" } else { "visible" }}>
                        <polygon points="25,15 85,50 25,85" />
                    </g>
                    <g visibility={if running { "visible" } else { "hidden" }}>
                        <rect x="22" y="15" width="20" height="70" />
                        <rect x="58" y="15" width="20" height="70" />
                    </g>
                </svg>
                <svg id="reset"
                    ref={reset_ref}
                    class="control"
                    x={coords.reset.x.clone()}
                    y={coords.reset.y.clone()}
                    viewBox={ICON_VIEW_BOX}
                    width={font_size.clone()}
                    height={font_size}
                    fill={fg.clone()}
                    onclick={countdown.on_reset.clone()}
                >
                    <rect class="opacity-0" width="100%" height="100%" />
                    { reset_glyph(&fg) }
                </svg>
            </svg>
        </div>
    }
}

/// Values chosen in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub theme: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hours: DEFAULT_HOURS,
            minutes: DEFAULT_MINUTES,
            seconds: DEFAULT_SECONDS,
            theme: DEFAULT_THEME,
        }
    }
}

impl Settings {
    fn with_segment(self, unit: TimeUnit, value: u32) -> Self {
        match unit {
            TimeUnit::Hours => Settings { hours: value, ..self },
            TimeUnit::Minutes => Settings { minutes: value, ..self },
            TimeUnit::Seconds => Settings { seconds: value, ..self },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsToggleProps {
    pub expanded: bool,
    pub foreground_color: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

/// Chevron that opens and closes the settings panel.
#[function_component(SettingsToggle)]
pub fn settings_toggle(props: &SettingsToggleProps) -> Html {
    let rotation = if props.expanded { "rotate(180 50 50)" } else { "" };
    html! {
        <svg id="settings-toggle"
            class="control"
            viewBox={ICON_VIEW_BOX}
            fill={props.foreground_color.clone()}
            onclick={props.onclick.clone()}
        >
            <rect class="opacity-0" width="100%" height="100%" />
            <g transform={rotation}>
                <polygon points="15,35 50,70 85,35 75,25 50,50 25,25" />
            </g>
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeSegmentProps {
    pub label: &'static str,
    pub unit: TimeUnit,
    pub value: u32,
    pub onchange: Callback<u32>,
}

/// One H/M/S dropdown.
#[function_component(TimeSegment)]
pub fn time_segment(props: &TimeSegmentProps) -> Html {
    let onchange = {
        let unit = props.unit;
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_segment(&select.value(), unit) {
                Ok(value) => onchange.emit(value),
                Err(err) => warn!("Ignoring segment input: {}", err),
            }
        })
    };

    html! {
        <div class="time-segment">
            <span>{ props.label }</span>
            <select {onchange}>
                { TIME_SEGMENT_OPTIONS.iter().map(|opt| html! {
                    <option value={opt.value.to_string()} selected={opt.value == props.value}>
                        { opt.label.as_str() }
                    </option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeSelectorProps {
    pub selected: usize,
    pub onchange: Callback<usize>,
}

#[function_component(ThemeSelector)]
pub fn theme_selector(props: &ThemeSelectorProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_theme_index(&select.value(), THEMES.len()) {
                Ok(index) => onchange.emit(index),
                Err(err) => warn!("Ignoring theme input: {}", err),
            }
        })
    };

    html! {
        <div class="theme-selector">
            <svg viewBox="0 0 24 24" fill="currentColor">
                <g>
                    <path d="M12 3a9 9 0 0 0 0 18c.83 0 1.5-.67 1.5-1.5 0-.39-.15-.74-.39-1.01-.23-.26-.38-.61-.38-.99 0-.83.67-1.5 1.5-1.5H16a5 5 0 0 0 5-5c0-4.42-4.03-8-9-8zm-5.5 9a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3zm3-4a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3zm5 0a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3zm3 4a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3z" />
                </g>
            </svg>
            <select {onchange}>
                { THEMES.iter().enumerate().map(|(idx, theme)| html! {
                    <option value={idx.to_string()} selected={idx == props.selected}>
                        { theme.label.as_str() }
                    </option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub expanded: bool,
    pub settings: Settings,
    pub onchange: Callback<Settings>,
}

/// Duration and theme pickers. Stays mounted while collapsed.
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let settings = props.settings;
    let segment = |label: &'static str, unit: TimeUnit, value: u32| {
        let onchange = props
            .onchange
            .reform(move |v: u32| settings.with_segment(unit, v));
        html! { <TimeSegment {label} {unit} {value} {onchange} /> }
    };
    let on_theme = props
        .onchange
        .reform(move |theme: usize| Settings { theme, ..settings });

    html! {
        <div id="settings" class={classes!((!props.expanded).then_some("collapsed"))}>
            <div class="time-segments">
                { segment("H", TimeUnit::Hours, settings.hours) }
                { segment("M", TimeUnit::Minutes, settings.minutes) }
                { segment("S", TimeUnit::Seconds, settings.seconds) }
            </div>
            <ThemeSelector selected={settings.theme} onchange={on_theme} />
        </div>
    }
}
