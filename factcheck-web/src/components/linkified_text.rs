use shared::text::{TextSegment, segment_text};
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LinkifiedTextProps {
    pub text: String,
}

/// User text with line breaks kept and URLs turned into links.
#[function_component(LinkifiedText)]
pub fn linkified_text(props: &LinkifiedTextProps) -> Html {
    let segments = segment_text(&props.text);
    html! {
        <>
            { for segments.into_iter().map(|segment| match segment {
                TextSegment::Text(text) => html! { { text } },
                TextSegment::Link(url) => html! {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{ url }</a>
                },
                TextSegment::LineBreak => html! { <br /> },
            }) }
        </>
    }
}
