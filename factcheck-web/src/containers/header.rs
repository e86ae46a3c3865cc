use crate::{
    components::{
        global_search::GlobalSearch, language_selector::LanguageSelector, nav_links::NavLinks,
        profile_menu::ProfileMenu,
    },
    hooks::use_layout_mode,
    routes::MainRoute,
    styles::Style,
};
use i18nrs::yew::use_translation;
use shared::{
    layout::{AccountControl, HeaderSlots, LayoutMode},
    models::User,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderBarProps {
    #[prop_or_default]
    pub on_menu_toggle: Callback<()>,
    #[prop_or_default]
    pub user: Option<User>,
    #[prop_or_default]
    pub on_login: Callback<()>,
    #[prop_or_default]
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub on_search: Option<Callback<String>>,
}

/// Sticky site header; wide screens get inline tabs and the account
/// control, compact screens a second row of tabs with a menu toggle.
#[function_component(HeaderBar)]
pub fn header_bar(props: &HeaderBarProps) -> Html {
    let (i18n, ..) = use_translation();
    let mode = use_layout_mode();
    let slots = HeaderSlots::resolve(mode, props.user.as_ref());

    let logo_class = match slots.mode {
        LayoutMode::Wide => Style::LogoWide.class(),
        LayoutMode::Compact => Style::LogoCompact.class(),
    };

    let account = match (&slots.account, props.user.as_ref()) {
        (AccountControl::Avatar, Some(user)) => html! {
            <ProfileMenu user={user.clone()} on_logout={props.on_logout.clone()} />
        },
        (AccountControl::LoginButton, _) => {
            let on_login = props.on_login.clone();
            html! {
                <button
                    class={classes!("login-button", Style::LoginButton.class())}
                    onclick={move |_: MouseEvent| on_login.emit(())}
                >
                    { i18n.t("header.login") }
                </button>
            }
        }
        _ => html! {},
    };

    let secondary_row = slots.secondary_row.then(|| {
        let on_menu_toggle = props.on_menu_toggle.clone();
        html! {
            <div class={Style::HeaderRow.class()}>
                <NavLinks />
                <button
                    class={classes!("menu-toggle", Style::MenuToggleButton.class())}
                    aria-label={i18n.t("header.menu")}
                    onclick={move |_: MouseEvent| on_menu_toggle.emit(())}
                >
                    <Icon icon_id={IconId::HeroiconsSolidEllipsisHorizontal} class="h-6 w-6" />
                </button>
            </div>
        }
    });

    html! {
        <header class={Style::HeaderRoot.class()} data-layout={format!("{:?}", slots.mode)}>
            <div class={Style::HeaderTop.class()}>
                <div class={Style::HeaderRow.class()}>
                    <Link<MainRoute> to={MainRoute::Home}>
                        <img class={logo_class} src={slots.logo_src()} alt="" />
                    </Link<MainRoute>>
                    if slots.inline_nav {
                        <NavLinks />
                    }
                </div>
                <GlobalSearch on_search={props.on_search.clone()} />
                <LanguageSelector />
                { account }
            </div>
            { secondary_row }
        </header>
    }
}
