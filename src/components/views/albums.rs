use crate::api::Album;
use crate::components::{AlbumsResource, Icon, IconKind, Library};
use dioxus::prelude::*;

#[component]
pub fn AlbumGrid() -> Element {
    let albums = use_context::<AlbumsResource>().0;
    let library = use_context::<Library>();

    rsx! {
        section { class: "album-section",
            {match albums() {
                Some(Ok(albums)) if albums.is_empty() => rsx! {
                    div { class: "empty-state",
                        Icon { kind: IconKind::Album, class: "icon large muted".to_string() }
                        p { "No albums found" }
                    }
                },
                Some(Ok(albums)) => rsx! {
                    div { class: "album-grid",
                        for album in albums {
                            AlbumCard {
                                key: "{album.folder}",
                                album: album.clone(),
                                onclick: {
                                    let library = library.clone();
                                    let album = album.clone();
                                    move |_| library.open_album(album.clone(), true)
                                },
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "empty-state",
                        Icon { kind: IconKind::Album, class: "icon large muted".to_string() }
                        p { "Could not load albums." }
                        p { class: "empty-detail", "{err}" }
                    }
                },
                None => rsx! {
                    div { class: "empty-state",
                        Icon { kind: IconKind::Loader, class: "icon large muted".to_string() }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn AlbumCard(album: Album, onclick: EventHandler<MouseEvent>) -> Element {
    let title = album.display_title();
    let description = album.display_description();
    let mut cover_failed = use_signal(|| false);

    rsx! {
        button {
            class: "album-card",
            onclick: move |evt| onclick.call(evt),
            div { class: "album-cover",
                if cover_failed() {
                    div { class: "album-cover-fallback",
                        Icon { kind: IconKind::Album, class: "icon large muted".to_string() }
                    }
                } else {
                    img {
                        src: "{album.cover_url}",
                        alt: "{title}",
                        loading: "lazy",
                        onerror: move |_| cover_failed.set(true),
                    }
                }
            }
            div { class: "album-info",
                p { class: "album-title", "{title}" }
                p { class: "album-description", "{description}" }
            }
        }
    }
}
