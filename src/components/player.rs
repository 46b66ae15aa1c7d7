use crate::components::{AudioState, Icon, IconKind, PlayerHandle};
use crate::playback::{progress_percent, slider_to_volume, time_display, volume_to_slider};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn Player() -> Element {
    let player = use_context::<PlayerHandle>();
    let clock = use_context::<AudioState>();

    let state = player.state();
    let current_time = (clock.current_time)();
    let duration = (clock.duration)();

    let now_playing = state
        .loaded
        .as_ref()
        .map(|track| track.name.clone())
        .unwrap_or_else(|| "No track playing".to_string());
    let is_playing = state.is_playing();
    let is_muted = state.is_muted();
    let volume = volume_to_slider(state.volume);
    let progress = progress_percent(current_time, duration);

    let on_seek_input = {
        let mut current_time_signal = clock.current_time;
        move |e: Event<FormData>| {
            let Ok(percent) = e.value().parse::<f64>() else {
                return;
            };
            match player.seek(percent / 100.0) {
                Ok(position) => current_time_signal.set(position),
                Err(err) => debug!(%err, "seek ignored"),
            }
        }
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            player.set_volume(slider_to_volume(val));
        }
    };

    rsx! {
        footer { class: "player-bar",
            div { class: "now-playing",
                Icon { kind: IconKind::Music, class: "icon muted".to_string() }
                span { class: "now-playing-name", title: "{now_playing}", "{now_playing}" }
            }

            div { class: "transport",
                div { class: "transport-buttons",
                    button {
                        id: "prev-btn",
                        class: "icon-button",
                        aria_label: "Previous",
                        onclick: move |_| {
                            player.previous();
                        },
                        Icon { kind: IconKind::Prev, class: "icon".to_string() }
                    }
                    button {
                        id: "play-pause-btn",
                        class: "icon-button play-button",
                        aria_label: if is_playing { "Pause" } else { "Play" },
                        onclick: move |_| {
                            player.toggle_play_pause();
                        },
                        if is_playing {
                            Icon { kind: IconKind::Pause, class: "icon".to_string() }
                        } else {
                            Icon { kind: IconKind::Play, class: "icon".to_string() }
                        }
                    }
                    button {
                        id: "next-btn",
                        class: "icon-button",
                        aria_label: "Next",
                        onclick: move |_| {
                            player.next();
                        },
                        Icon { kind: IconKind::Next, class: "icon".to_string() }
                    }
                }

                div { class: "seek-row",
                    input {
                        r#type: "range",
                        class: "seek-bar",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "{progress}",
                        style: "--progress: {progress}%",
                        oninput: on_seek_input,
                    }
                    span { class: "time-display", "{time_display(current_time, duration)}" }
                }
            }

            div { class: "volume",
                button {
                    class: "icon-button",
                    aria_label: if is_muted { "Unmute" } else { "Mute" },
                    onclick: move |_| {
                        player.toggle_mute();
                    },
                    if is_muted {
                        Icon { kind: IconKind::Mute, class: "icon".to_string() }
                    } else {
                        Icon { kind: IconKind::Volume, class: "icon".to_string() }
                    }
                }
                input {
                    r#type: "range",
                    class: "volume-slider",
                    min: "0",
                    max: "100",
                    value: volume,
                    oninput: on_volume_change,
                }
            }
        }
    }
}
