//! Page shell: sidebar on the left, routed page on the right

use dioxus::prelude::*;

use super::Sidebar;
use crate::routes::Route;

#[component]
pub fn SidebarLayout() -> Element {
    rsx! {
        div {
            class: "flex",
            Sidebar {}
            main {
                class: "flex-1 min-h-screen bg-white",
                Outlet::<Route> {}
            }
        }
    }
}
