use crate::components::{AudioState, PlayerHandle};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::playback::PollMemory;

/// Polls the hidden `<audio>` element every 200ms and feeds what it sees
/// back into the controller.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let player = use_context::<PlayerHandle>();
    let clock = use_context::<AudioState>();

    use_effect(move || {
        spawn(async move {
            let mut memory = PollMemory::default();
            loop {
                gloo_timers::future::TimeoutFuture::new(200).await;
                player.poll_output(clock, &mut memory);
            }
        });
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    let _player = use_context::<PlayerHandle>();
    let _clock = use_context::<AudioState>();
    rsx! {}
}
