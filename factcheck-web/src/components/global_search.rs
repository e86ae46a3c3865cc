use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, function_component, html, use_node_ref};

use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct GlobalSearchProps {
    #[prop_or_default]
    pub on_search: Option<Callback<String>>,
}

/// Search box shared by both header layouts.
#[function_component(GlobalSearch)]
pub fn global_search(props: &GlobalSearchProps) -> Html {
    let (i18n, ..) = use_translation();
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |event: yew::SubmitEvent| {
            event.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let query = input.value().trim().to_string();
            if query.is_empty() {
                return;
            }
            if let Some(on_search) = on_search.as_ref() {
                on_search.emit(query);
            }
        })
    };

    html! {
        <form class="global-search" role="search" {onsubmit}>
            <input
                ref={input_ref}
                type="search"
                class={Style::SearchInput.class()}
                placeholder={i18n.t("header.search_placeholder")}
            />
        </form>
    }
}
