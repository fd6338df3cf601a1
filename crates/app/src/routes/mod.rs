pub mod cases;
pub mod home;
pub mod judges;
pub mod side_drawer;
pub mod upload;

use dioxus::prelude::*;

use cases::{CaseOverview, CaseUpdate, SavedCases};
use home::{Home, HomeView};
use judges::{JudgePage, SavedJudges};
use upload::UploadCase;

/// Application routes. Every page lives under the home view, which owns
/// the loaded data and the bookmark mutations.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(HomeView)]
        #[route("/")]
        Home {},
        #[route("/upload-case")]
        UploadCase {},
        #[route("/saved-cases")]
        SavedCases {},
        #[route("/saved-judges")]
        SavedJudges {},
        #[route("/judge/:name")]
        JudgePage { name: String },
        #[route("/case/:id")]
        CaseOverview { id: String },
        #[route("/case/:id/update")]
        CaseUpdate { id: String },
        #[route("/:..route")]
        Unmatched { route: Vec<String> },
}

/// Paths outside the table above render nothing in the content area.
#[component]
fn Unmatched(route: Vec<String>) -> Element {
    tracing::debug!(path = %route.join("/"), "No view for path");
    rsx! {}
}
