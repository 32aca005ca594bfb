use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressControlsProps {
    pub progress: String,
    pub text: String,
    pub a11y_text: String,
    pub lang: String,
    pub on_progress_change: Callback<String>,
    pub on_text_change: Callback<String>,
    pub on_a11y_text_change: Callback<String>,
    pub on_lang_change: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(ProgressControls)]
pub fn progress_controls(props: &ProgressControlsProps) -> Html {
    let on_progress_change = {
        let callback = props.on_progress_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let on_text_change = {
        let callback = props.on_text_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let on_a11y_text_change = {
        let callback = props.on_a11y_text_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(select.value());
        })
    };

    let on_lang_change = {
        let callback = props.on_lang_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(select.value());
        })
    };

    html! {
        <>
            <div class="form-group">
                <label for="progress-value">{ "Progress (number or text):" }</label>
                <input
                    id="progress-value"
                    type="text"
                    value={props.progress.clone()}
                    onchange={on_progress_change}
                    disabled={props.disabled}
                />
            </div>

            <div class="form-group">
                <label for="progress-text">{ "Text (leave empty for the percentage):" }</label>
                <input
                    id="progress-text"
                    type="text"
                    value={props.text.clone()}
                    onchange={on_text_change}
                />
            </div>

            <div class="form-group">
                <label for="progress-a11y">{ "Screen reader prefix:" }</label>
                <select
                    id="progress-a11y"
                    value={props.a11y_text.clone()}
                    onchange={on_a11y_text_change}
                >
                    <option value="">{ "None" }</option>
                    <option value="core.downloading">{ "Downloading" }</option>
                    <option value="core.uploading">{ "Uploading" }</option>
                    <option value="core.progress">{ "Progress" }</option>
                </select>
            </div>

            <div class="form-group">
                <label for="progress-lang">{ "Language:" }</label>
                <select
                    id="progress-lang"
                    value={props.lang.clone()}
                    onchange={on_lang_change}
                >
                    <option value="en">{ "English" }</option>
                    <option value="es">{ "Español" }</option>
                </select>
            </div>
        </>
    }
}
