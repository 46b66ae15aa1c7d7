//! The playback primitive: whatever actually makes sound.

#[cfg(target_arch = "wasm32")]
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Native audio capability driven by the controller. Position and duration are
/// owned here and only read through it; duration is NaN until metadata loads.
pub trait AudioOutput {
    fn set_source(&self, url: &str);
    fn play(&self);
    fn pause(&self);
    fn is_paused(&self) -> bool;
    fn has_ended(&self) -> bool;
    fn position(&self) -> f64;
    fn set_position(&self, seconds: f64);
    fn duration(&self) -> f64;
    fn set_volume(&self, level: f64);
}

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "albumdeck-audio";

/// Find the single hidden audio element, creating it on first use.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Stream instead of buffering whole files.
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// `<audio>` element backed output. Every call is a no-op when the element
/// could not be created.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct HtmlAudioOutput {
    element: Option<HtmlAudioElement>,
}

#[cfg(target_arch = "wasm32")]
impl HtmlAudioOutput {
    pub fn attach() -> Self {
        Self {
            element: get_or_create_audio_element(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioOutput for HtmlAudioOutput {
    fn set_source(&self, url: &str) {
        if let Some(audio) = &self.element {
            audio.set_src(url);
        }
    }

    fn play(&self) {
        let Some(audio) = &self.element else {
            return;
        };
        if let Ok(promise) = audio.play() {
            wasm_bindgen_futures::spawn_local(async move {
                // Browsers reject play() until the user has interacted with the page.
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    debug!(?err, "play() was rejected");
                }
            });
        }
    }

    fn pause(&self) {
        if let Some(audio) = &self.element {
            let _ = audio.pause();
        }
    }

    fn is_paused(&self) -> bool {
        self.element.as_ref().map(|a| a.paused()).unwrap_or(true)
    }

    fn has_ended(&self) -> bool {
        self.element.as_ref().map(|a| a.ended()).unwrap_or(false)
    }

    fn position(&self) -> f64 {
        self.element.as_ref().map(|a| a.current_time()).unwrap_or(0.0)
    }

    fn set_position(&self, seconds: f64) {
        if let Some(audio) = &self.element {
            audio.set_current_time(seconds);
        }
    }

    fn duration(&self) -> f64 {
        self.element.as_ref().map(|a| a.duration()).unwrap_or(f64::NAN)
    }

    fn set_volume(&self, level: f64) {
        if let Some(audio) = &self.element {
            audio.set_volume(level);
        }
    }
}

/// Output for targets without a browser audio element: accepts every command
/// and never plays.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct SilentOutput;

#[cfg(not(target_arch = "wasm32"))]
impl SilentOutput {
    pub fn attach() -> Self {
        tracing::warn!("no audio backend on this target; playback is silent");
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioOutput for SilentOutput {
    fn set_source(&self, _url: &str) {}
    fn play(&self) {}
    fn pause(&self) {}
    fn is_paused(&self) -> bool {
        true
    }
    fn has_ended(&self) -> bool {
        false
    }
    fn position(&self) -> f64 {
        0.0
    }
    fn set_position(&self, _seconds: f64) {}
    fn duration(&self) -> f64 {
        f64::NAN
    }
    fn set_volume(&self, _level: f64) {}
}

#[cfg(target_arch = "wasm32")]
pub type PlatformOutput = HtmlAudioOutput;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformOutput = SilentOutput;
