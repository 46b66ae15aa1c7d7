use crate::api::{Album, CatalogLoader, HttpSource};
use crate::components::views::AlbumGrid;
use crate::components::{
    AlbumsResource, AudioController, AudioState, Icon, IconKind, Library, Player, PlayerHandle,
    Sidebar, TracksStatus,
};
use crate::db::{load_settings, PlayerSettings};
use crate::playback::{PlatformOutput, PlaybackController};
use dioxus::prelude::*;
use tracing::{info, warn};

#[component]
pub fn AppShell() -> Element {
    let settings = use_signal(|| match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%err, "falling back to default settings");
            PlayerSettings::default()
        }
    });
    let controller = use_signal(move || {
        let settings = settings.peek();
        PlaybackController::new(PlatformOutput::attach(), settings.volume)
            .with_auto_advance(settings.auto_advance)
    });
    let tracks_status = use_signal(|| TracksStatus::NotLoaded);
    let current_time = use_signal(|| 0.0f64);
    let duration = use_signal(|| f64::NAN);
    let mut sidebar_open = use_signal(|| false);
    let mut startup_done = use_signal(|| false);

    let player = PlayerHandle::new(controller, settings);
    let library = use_hook(move || {
        let settings = settings.peek();
        info!(
            strategy = ?settings.catalog_strategy,
            root = %settings.songs_root,
            "opening catalog"
        );
        let source = HttpSource::new(settings.base_url.clone());
        let loader = CatalogLoader::new(source, settings.catalog_strategy, settings.songs_root.clone());
        Library::new(loader, player, tracks_status)
    });

    let albums = use_resource({
        let library = library.clone();
        move || {
            let loader = library.loader().clone();
            async move { loader.list_albums().await }
        }
    });

    use_context_provider(|| player);
    use_context_provider(|| library.clone());
    use_context_provider(|| AlbumsResource(albums));
    use_context_provider(|| AudioState {
        current_time,
        duration,
    });

    // Open the startup album, paused, once the album list has settled.
    {
        let library = library.clone();
        use_effect(move || {
            let Some(listed) = albums() else {
                return;
            };
            if *startup_done.peek() {
                return;
            }
            startup_done.set(true);

            let settings = settings.peek().clone();
            let listed = listed.unwrap_or_default();
            let album = match settings.startup_album {
                Some(folder) => listed
                    .iter()
                    .find(|album| album.folder == folder)
                    .cloned()
                    .unwrap_or_else(|| Album::new(&settings.songs_root, folder, None, None)),
                None => match listed.first() {
                    Some(album) => album.clone(),
                    None => return,
                },
            };
            library.open_album(album, false);
        });
    }

    rsx! {
        div { class: "app-shell",
            if sidebar_open() {
                div {
                    class: "sidebar-scrim",
                    onclick: move |_| sidebar_open.set(false),
                }
            }

            Sidebar { sidebar_open }

            main { class: "main-panel",
                header { class: "main-header",
                    button {
                        class: "icon-button hamburger",
                        aria_label: "Open library",
                        onclick: move |_| sidebar_open.set(true),
                        Icon { kind: IconKind::Menu, class: "icon".to_string() }
                    }
                    h1 { class: "page-title", "Albums" }
                }
                AlbumGrid {}
            }

            Player {}
        }

        // Polls the audio output; renders nothing.
        AudioController {}
    }
}
