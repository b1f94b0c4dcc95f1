use dioxus::prelude::*;

use common::search_query::EntityKind;

use crate::components::navbar::Navbar;
use crate::data_definitions::route_param::RouteParam;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;
use crate::pages::season_page::SeasonPage;
use crate::pages::series_index_page::SeriesIndexPage;
use crate::pages::wiki_page::WikiPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search/:entity/:search_query")]
    SearchPage {
        entity: EntityKind,
        search_query: RouteParam<String>,
    },


    #[route("/wiki/:..page_slug")]
    WikiPage { page_slug: Vec<String> },


    #[route("/series")]
    SeriesIndexPage {  },

    #[route("/year/:year/:season")]
    SeasonPage { year: i32, season: String },

}

impl Route {
    pub fn search_page(entity: EntityKind, search_query: String) -> Self {
        Self::SearchPage {
            entity,
            search_query: RouteParam::from(search_query),
        }
    }
}
