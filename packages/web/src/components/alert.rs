use dioxus::prelude::*;

/// Destructive alert box
#[component]
pub fn ErrorAlert(title: &'static str, message: String) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "mb-4 flex gap-3 rounded-lg border border-red-200 bg-red-50 p-4 text-red-700",
            span { class: "text-lg", "\u{26A0}" }
            div {
                p { class: "font-semibold", "{title}" }
                p { class: "text-sm", "{message}" }
            }
        }
    }
}
