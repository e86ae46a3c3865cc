use i18nrs::yew::use_translation;
use yew::{Callback, Children, Html, Properties, classes, function_component, html, use_state};

use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct ExpandableTextProps {
    pub children: Children,
    /// Start expanded; long replies on permalink pages read better that way.
    #[prop_or_default]
    pub expanded: bool,
}

/// Clamp long text to a few lines with a More/Less toggle.
#[function_component(ExpandableText)]
pub fn expandable_text(props: &ExpandableTextProps) -> Html {
    let (i18n, ..) = use_translation();
    let expanded = use_state(|| props.expanded);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            expanded.set(!*expanded);
        })
    };

    let body_class = classes!(
        Style::ExpandableText.class(),
        (!*expanded).then_some(Style::CollapsedText.class())
    );

    html! {
        <div>
            <div class={body_class}>{ props.children.clone() }</div>
            <button class="btn btn-link btn-xs px-0" onclick={toggle}>
                { if *expanded { i18n.t("reply.less") } else { i18n.t("reply.more") } }
            </button>
        </div>
    }
}
