//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SidebarLayout;
use crate::pages::{CookiesCounter, Home, NotFound, OctoProfiles};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SidebarLayout)]
        #[route("/")]
        Home {},

        #[route("/octo-profiles")]
        OctoProfiles {},

        #[route("/cookies-counter")]
        CookiesCounter {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
