//! Loading components

use dioxus::prelude::*;

/// Placeholder bars shown while the table loads
#[component]
pub fn SkeletonRows(#[props(default = 5)] count: usize) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "h-6 w-full rounded bg-gray-200 animate-pulse"
                }
            }
        }
    }
}
