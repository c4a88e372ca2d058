//! Sidebar navigation component

use dioxus::prelude::*;

use crate::routes::Route;

/// Vertical navigation with one entry per page
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "h-screen w-64 border-r border-gray-200 bg-gray-50 flex flex-col gap-1 p-4",
            NavLink { to: Route::Home {}, icon: "\u{1F3E0}", label: "Home" }
            NavLink { to: Route::OctoProfiles {}, icon: "\u{1F9E9}", label: "Octo Profiles" }
            NavLink { to: Route::CookiesCounter {}, icon: "\u{1F36A}", label: "Cookies Counter" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    icon: &'static str,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "flex items-center gap-2 px-3 py-2 rounded-md text-sm font-semibold bg-gray-200 text-gray-900"
            } else {
                "flex items-center gap-2 px-3 py-2 rounded-md text-sm text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}
