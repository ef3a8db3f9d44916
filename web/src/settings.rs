use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let theme_button = |label: &'static str, theme: Theme| {
        html! {
            <li>
                <a
                    href="#"
                    onclick={Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        Theme::apply(theme);
                    })}
                >
                    {label}
                </a>
            </li>
        }
    };

    let on_close = props.on_close.clone();

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <ul>
                    {theme_button("Auto", Theme::Auto)}
                    {theme_button("Light", Theme::Light)}
                    {theme_button("Dark", Theme::Dark)}
                </ul>
                <footer>
                    <button onclick={Callback::from(move |_| on_close.emit(()))}>
                        {"Close"}
                    </button>
                </footer>
            </article>
        </dialog>
    }
}
