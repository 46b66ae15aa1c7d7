use crate::components::views::TrackList;
use crate::components::{Icon, IconKind, PlayerHandle};
use dioxus::prelude::*;

#[component]
pub fn Sidebar(mut sidebar_open: Signal<bool>) -> Element {
    let player = use_context::<PlayerHandle>();
    let title = player
        .state()
        .album
        .map(|album| album.display_title())
        .unwrap_or_else(|| "Songs".to_string());

    let class = if sidebar_open() {
        "sidebar open"
    } else {
        "sidebar"
    };

    rsx! {
        aside { class: "{class}",
            div { class: "sidebar-header",
                Icon { kind: IconKind::Album, class: "icon".to_string() }
                h2 { class: "sidebar-title", "{title}" }
                button {
                    class: "icon-button sidebar-close",
                    aria_label: "Close library",
                    onclick: move |_| sidebar_open.set(false),
                    Icon { kind: IconKind::Close, class: "icon".to_string() }
                }
            }
            TrackList {}
        }
    }
}
