//! Main module for the donut countdown timer using Yew.
//! Holds the settings state and embeds the countdown display.

use donut_timer::theme::theme_at;
use log::info;
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod hooks;
mod logger;
mod utils;

use components::{CountdownTimer, Settings, SettingsPanel, SettingsToggle};

/// Top-level component: settings navigation above the timer.
#[function_component(App)]
fn app() -> Html {
    let settings = use_state(Settings::default);
    let expanded = use_state(|| false);

    let theme = theme_at(settings.theme);
    let background: AttrValue = AttrValue::Static(theme.background_color.as_str());
    let foreground: AttrValue = AttrValue::Static(theme.foreground_color.as_str());

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let on_settings = {
        let settings = settings.clone();
        Callback::from(move |next: Settings| {
            if next.theme != settings.theme {
                info!("Theme changed to {}", theme_at(next.theme).label);
            }
            settings.set(next);
        })
    };

    html! {
        <div id="app" style={format!("background-color: {}; color: {};", background, foreground)}>
            <nav>
                <SettingsToggle
                    expanded={*expanded}
                    foreground_color={foreground.clone()}
                    onclick={on_toggle}
                />
                <SettingsPanel
                    expanded={*expanded}
                    settings={*settings}
                    onchange={on_settings}
                />
            </nav>
            <CountdownTimer
                hours={settings.hours}
                minutes={settings.minutes}
                seconds={settings.seconds}
                foreground_color={foreground}
                background_color={background}
            />
        </div>
    }
}

/// Entry point: installs the console logger and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    yew::Renderer::<App>::new().render();
}
