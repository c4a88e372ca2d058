use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4 text-gray-700",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "text-sm text-gray-500", "/{path}" }
            Link {
                to: Route::Home {},
                class: "text-sm text-blue-600 hover:underline",
                "Back to Home"
            }
        }
    }
}
