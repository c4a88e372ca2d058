//! Cookies counter page

use dashboard_core::{cookie_summary, count_cookies};
use dioxus::prelude::*;

/// Counts cookie objects in a pasted JSON export
#[component]
pub fn CookiesCounter() -> Element {
    let mut cookies = use_signal(String::new);
    let mut cookies_count = use_signal(|| None::<usize>);

    let handle_count = move |_| {
        cookies_count.set(Some(count_cookies(&cookies.read())));
    };

    rsx! {
        section {
            class: "m-4 rounded-lg border border-gray-200 bg-white shadow-sm",
            header {
                class: "border-b border-gray-100 px-6 py-4",
                h1 { class: "text-xl font-semibold text-gray-900", "\u{1F36A} Cookies Counter" }
            }
            div {
                class: "flex flex-col gap-4 px-6 py-4",
                textarea {
                    class: "min-h-32 w-full rounded-md border border-gray-300 px-3 py-2 font-mono text-sm focus:outline-none focus:ring-2 focus:ring-gray-400",
                    placeholder: "Paste your JSON array here",
                    value: "{cookies}",
                    oninput: move |e| cookies.set(e.value()),
                }
                button {
                    class: "self-start rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white hover:bg-gray-700",
                    onclick: handle_count,
                    "Count cookies"
                }
                if let Some(count) = cookies_count() {
                    div {
                        class: "text-sm text-gray-500",
                        {cookie_summary(count)}
                    }
                }
            }
        }
    }
}
