use i18nrs::yew::use_translation;
use web_sys::HtmlSelectElement;
use yew::{Callback, Event, Html, TargetCast, function_component, html};

use crate::language::{self, LanguageInfo};

/// Catalog switcher shown next to the search box.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = i18n.get_current_language().to_string();
    let current_name = language::get_language_info(&current)
        .map(|info| info.native_name)
        .unwrap_or_default();

    let mut languages: Vec<LanguageInfo> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    let onchange = Callback::from(move |event: Event| {
        let code = event.target_unchecked_into::<HtmlSelectElement>().value();
        log::debug!("switching language to {code}");
        set_language.emit(code);
    });

    html! {
        <select
            class="select select-ghost select-sm"
            aria-label={i18n.t("language.selector")}
            title={current_name}
            {onchange}
        >
            { for languages.into_iter().map(|info| html! {
                <option value={info.code} selected={info.code == current}>
                    { info.native_name }
                </option>
            }) }
        </select>
    }
}
