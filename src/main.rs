use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod error;
mod playback;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#1d1f24" }
        document::Title { "AlbumDeck" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
