//! Home page component

use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "m-4 rounded-lg border border-gray-200 bg-white shadow-sm",
            header {
                class: "border-b border-gray-100 px-6 py-4",
                h1 { class: "text-xl font-semibold text-gray-900", "\u{1F3E0} Home" }
            }
            div {
                class: "px-6 py-4 text-gray-700",
                p { "Welcome to the Home page." }
            }
        }
    }
}
