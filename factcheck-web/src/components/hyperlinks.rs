use i18nrs::yew::use_translation;
use shared::models::Hyperlink;
use yew::{Html, Properties, function_component, html};

use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct HyperlinksProps {
    pub hyperlinks: Vec<Hyperlink>,
    /// Entity kind the poller refreshes, e.g. `replies`.
    pub polling_type: &'static str,
    pub polling_id: String,
}

/// Preview cards for links found in a reply.
///
/// While any link is still being fetched the list carries polling markers
/// that the query client watches to refetch the owning entity.
#[function_component(Hyperlinks)]
pub fn hyperlinks(props: &HyperlinksProps) -> Html {
    let (i18n, ..) = use_translation();
    if props.hyperlinks.is_empty() {
        return html! {};
    }
    let polling = props.hyperlinks.iter().any(Hyperlink::is_pending);

    html! {
        <section
            class="hyperlinks"
            data-polling-type={polling.then_some(props.polling_type)}
            data-polling-id={polling.then(|| props.polling_id.clone())}
        >
            { for props.hyperlinks.iter().map(|hyperlink| html! {
                <article class={Style::HyperlinkCard.class()} key={hyperlink.url.clone()}>
                    <a href={hyperlink.url.clone()} target="_blank" rel="noopener noreferrer">
                        { hyperlink.label() }
                    </a>
                    if hyperlink.is_pending() {
                        <p class="text-xs opacity-60">{ i18n.t("reply.fetching_link") }</p>
                    }
                    if let Some(summary) = hyperlink.summary.as_ref() {
                        <p class="text-sm line-clamp-2">{ summary.clone() }</p>
                    }
                    if let Some(error) = hyperlink.error.as_ref() {
                        <p class="text-xs text-error">{ error.clone() }</p>
                    }
                </article>
            }) }
        </section>
    }
}
