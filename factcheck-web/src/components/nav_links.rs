use i18nrs::yew::use_translation;
use shared::layout::{NavEntry, NavTarget, nav_entries};
use yew::{Html, Properties, classes, function_component, html, use_context};
use yew_router::hooks::use_location;
use yew_router::prelude::{Link, Routable};

use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    /// Path of the current page; read from the router when absent.
    #[prop_or_default]
    pub current_path: Option<String>,
}

/// The header tabs: two in-app routes and two external links.
#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    let (i18n, ..) = use_translation();
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let location = use_location();
    let current_path = props
        .current_path
        .clone()
        .or_else(|| location.map(|location| location.path().to_string()))
        .unwrap_or_default();

    let render_entry = |entry: NavEntry| {
        let label = i18n.t(entry.label_key);
        let class = classes!(
            Style::Tab.class(),
            entry.is_active(&current_path).then_some(Style::ActiveTab.class()),
            entry.hidden_on_xs.then_some("hidden sm:block")
        );
        match entry.target {
            NavTarget::Internal(path) => {
                let route = MainRoute::recognize(path).unwrap_or(MainRoute::NotFound);
                html! {
                    <Link<MainRoute> to={route} classes={class}>{ label }</Link<MainRoute>>
                }
            }
            NavTarget::External(url) => html! {
                <a href={url} {class} target="_blank" rel="noopener noreferrer">{ label }</a>
            },
        }
    };

    html! {
        <nav class={Style::Tabs.class()}>
            { for nav_entries(&config.site_links).into_iter().map(render_entry) }
        </nav>
    }
}
