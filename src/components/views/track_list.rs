use crate::api::Track;
use crate::components::{Icon, IconKind, Library, PlayerHandle, TracksStatus};
use dioxus::prelude::*;

/// Rows for the active album's tracks; the whole list is replaced when the
/// album changes.
#[component]
pub fn TrackList() -> Element {
    let library = use_context::<Library>();
    let player = use_context::<PlayerHandle>();
    let state = player.state();
    let current = state.current_index();

    let status = library.tracks_status();
    let body = if status == TracksStatus::Loading {
        rsx! {
            div { class: "track-message",
                Icon { kind: IconKind::Loader, class: "icon".to_string() }
            }
        }
    } else if let Some(message) = status.message(!state.tracks.is_empty()) {
        rsx! {
            p { class: "track-message", "{message}" }
        }
    } else {
        rsx! {
            ul { class: "track-list",
                for (index, track) in state.tracks.iter().cloned().enumerate() {
                    TrackRow {
                        key: "{index}-{track.stream_url}",
                        track,
                        active: current == Some(index),
                        onclick: move |_| player.play_index(index, true),
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "track-panel", {body} }
    }
}

#[component]
fn TrackRow(track: Track, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active { "track-row active" } else { "track-row" };
    rsx! {
        li {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            Icon { kind: IconKind::Music, class: "icon small".to_string() }
            span { class: "track-name", title: "{track.name}", "{track.name}" }
        }
    }
}
