use crate::{containers::layout::Layout, pages::*};
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/articles")]
    Articles,
    #[at("/replies")]
    Replies,
    #[at("/reply/:id")]
    Reply { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    let page = match route {
        MainRoute::Home | MainRoute::Replies => html! { <RepliesPage /> },
        MainRoute::Articles => html! { <ArticlesPage /> },
        MainRoute::Reply { id } => html! { <ReplyPage {id} /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };
    html! { <Layout>{page}</Layout> }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
