use i18nrs::yew::use_translation;
use shared::{
    avatar::AvatarSource,
    models::User,
    profile_menu::{
        ProfileMenuEffect, ProfileMenuEvent, ProfileMenuItem, ProfileMenuState, level_badge,
    },
};
use strum::IntoEnumIterator;
use yew::{Callback, Html, Properties, function_component, html, use_context, use_state};
use yew_icons::{Icon, IconId};

use crate::config::FrontendConfig;
use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct ProfileMenuProps {
    pub user: User,
    pub on_logout: Callback<()>,
    /// Initial state; the header starts closed.
    #[prop_or_default]
    pub initial_state: ProfileMenuState,
}

/// Avatar button and the dropdown it opens.
#[function_component(ProfileMenu)]
pub fn profile_menu(props: &ProfileMenuProps) -> Html {
    let (i18n, ..) = use_translation();
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let state = use_state(|| props.initial_state);

    let dispatch = {
        let state = state.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |event: ProfileMenuEvent| {
            let (next, effect) = (*state).transition(event);
            log::debug!("profile menu {event:?}: {:?} -> {next:?}", *state);
            state.set(next);
            if effect == Some(ProfileMenuEffect::Logout) {
                on_logout.emit(());
            }
        })
    };
    let on = |event: ProfileMenuEvent| {
        let dispatch = dispatch.clone();
        Callback::from(move |mouse: yew::MouseEvent| {
            mouse.prevent_default();
            dispatch.emit(event);
        })
    };
    let on_keydown = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: yew::KeyboardEvent| {
            if event.key() == "Escape" {
                dispatch.emit(ProfileMenuEvent::Close);
            }
        })
    };

    let avatar_url = config.avatar_source().avatar_url(&props.user);
    let name = props.user.display_name().unwrap_or_default().to_string();

    let row = |item: ProfileMenuItem| {
        let onclick = on(ProfileMenuEvent::Select(item));
        let content = match item {
            ProfileMenuItem::Summary => html! {
                <>
                    <img class={Style::Avatar.class()} src={avatar_url.clone()} alt="" />
                    <span>{ name.clone() }</span>
                </>
            },
            ProfileMenuItem::MyProfile | ProfileMenuItem::About | ProfileMenuItem::Logout => {
                let icon = match item {
                    ProfileMenuItem::MyProfile => IconId::HeroiconsOutlineUserCircle,
                    ProfileMenuItem::About => IconId::HeroiconsOutlineInformationCircle,
                    _ => IconId::HeroiconsOutlineArrowRightOnRectangle,
                };
                html! {
                    <>
                        <Icon icon_id={icon} class={Style::ListIcon.class()} />
                        <span>{ item.label_key().map(|key| i18n.t(key)).unwrap_or_default() }</span>
                    </>
                }
            }
        };
        html! {
            <li role="menuitem" data-item={format!("{item:?}")}>
                <a {onclick}>{ content }</a>
            </li>
        }
    };

    let rows = ProfileMenuItem::iter().enumerate().map(|(index, item)| {
        html! {
            <>
                if index > 0 {
                    <div class={Style::MenuDivider.class()}></div>
                }
                { row(item) }
            </>
        }
    });

    html! {
        <div class="relative" onkeydown={on_keydown}>
            <img
                class={Style::Avatar.class()}
                src={avatar_url.clone()}
                alt=""
                role="button"
                aria-haspopup="menu"
                aria-expanded={(*state).is_open().to_string()}
                onclick={on(ProfileMenuEvent::AvatarClicked)}
            />
            if (*state).is_open() {
                <div class="fixed inset-0 z-10" onclick={on(ProfileMenuEvent::Dismiss)}></div>
                <ul id="profile-menu" role="menu" class={Style::ProfileMenu.class()}>
                    <li class={Style::LevelBadge.class()}>{ level_badge(props.user.level) }</li>
                    { for rows }
                </ul>
            }
        </div>
    }
}
