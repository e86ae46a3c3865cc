use chrono::Local;
use i18nrs::yew::use_translation;
use shared::{
    models::Timestamp,
    template::fill,
    time::{RelativeTime, format_absolute},
};
use yew::{Html, Properties, function_component, html};

use crate::i18n_html::relative_time_label;

#[derive(Properties, PartialEq)]
pub struct TimeAgoProps {
    pub at: Option<Timestamp>,
}

/// "3 days ago", with the local date and time as a tooltip.
#[function_component(TimeAgo)]
pub fn time_ago(props: &TimeAgoProps) -> Html {
    let (i18n, ..) = use_translation();
    let Some(at) = props.at else {
        return html! {};
    };

    let local = at.with_timezone(&Local);
    let distance = RelativeTime::since(&local, &Local::now());
    let time = relative_time_label(|key| i18n.t(key), distance);
    let label = fill(&i18n.t("reply.time_ago"), &[("time", &time)]);

    html! {
        <span title={format_absolute(&local)}>{ label }</span>
    }
}
