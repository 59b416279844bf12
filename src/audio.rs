//! Completion chime backed by an `HtmlAudioElement`.
//! Playback is fire-and-forget: failures (autoplay policy, missing asset) are logged.

use js_sys::Promise;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

pub struct Chime {
    audio: HtmlAudioElement,
}

impl Chime {
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let audio = HtmlAudioElement::new_with_src(src)?;
        audio.set_preload("auto");
        Ok(Chime { audio })
    }

    pub fn play(&self) {
        let promise: Promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                warn!("Chime could not start: {:?}", e);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("Chime playback rejected: {:?}", e);
            }
        });
    }

    /// Stop playback and seek back to the start.
    pub fn rewind(&self) {
        if let Err(e) = self.audio.pause() {
            debug!("Chime pause failed: {:?}", e);
        }
        self.audio.set_current_time(0.0);
    }
}
