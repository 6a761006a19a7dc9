use dioxus::prelude::*;
use crate::views::{ Home, Navbar, NotFound };

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/:..segments")] NotFound {
        segments: Vec<String>,
    },
}
