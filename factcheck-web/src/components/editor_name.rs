use i18nrs::yew::use_translation;
use shared::{attribution::EditorLabel, profile_menu::level_badge};
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct EditorNameProps {
    pub editor: EditorLabel,
}

/// Editor name with a level hint; nameless editors show "Someone".
#[function_component(EditorName)]
pub fn editor_name(props: &EditorNameProps) -> Html {
    let (i18n, ..) = use_translation();
    let name = props
        .editor
        .name
        .clone()
        .unwrap_or_else(|| i18n.t("editor.someone"));

    html! {
        <span class="editor-name">
            { name }
            if props.editor.level > 0 {
                <small class="ml-1 opacity-60">{ level_badge(props.editor.level) }</small>
            }
        </span>
    }
}
