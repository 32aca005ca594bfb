use crate::components::{
    progress_bar::ProgressBar,
    progress_controls::ProgressControls,
};
use crate::i18n::{Catalog, CatalogError, Translations};
use crate::progress::{Progress, ProgressValue};
use gloo::console::{error, log};
use gloo::timers::callback::Interval;
use yew::prelude::*;

const SPANISH: &str = include_str!("../lang/es.json");
const TICK_MS: u32 = 200;
const STEP: u32 = 5;

pub struct App {
    progress: ProgressValue,
    progress_input: String,
    text: String,
    a11y_text: String,
    lang: String,
    english: Translations,
    spanish: Option<Translations>,
    translations: Translations,
    ticker: Option<Interval>,
    mount: u32,
    logs: Vec<String>,
}

pub enum Msg {
    SetProgress(String),
    SetText(String),
    SetA11yText(String),
    SetLanguage(String),
    StartSimulation,
    Tick,
    Remount,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let english = Translations::default();
        let spanish = match load_spanish() {
            Ok(catalog) => Some(Translations::new(catalog)),
            Err(err) => {
                error!(format!("Failed to load Spanish strings: {}", err));
                None
            }
        };

        let mut app = Self {
            progress: ProgressValue::from(0),
            progress_input: "0".to_string(),
            text: String::new(),
            a11y_text: String::new(),
            lang: "en".to_string(),
            translations: english.clone(),
            english,
            spanish,
            ticker: None,
            mount: 0,
            logs: Vec::new(),
        };
        app.add_log("Progress bar demo ready".to_string());
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetProgress(value) => {
                self.ticker = None;
                self.add_log(format!("progress = {:?}", value));
                self.progress_input = value.clone();
                self.progress = ProgressValue::from(value);
                true
            }
            Msg::SetText(text) => {
                self.add_log(format!("text = {:?}", text));
                self.text = text;
                true
            }
            Msg::SetA11yText(key) => {
                self.add_log(format!("a11y_text = {:?}", key));
                self.a11y_text = key;
                true
            }
            Msg::SetLanguage(lang) => {
                let spanish = if lang == "es" { self.spanish.clone() } else { None };
                if lang == "es" && spanish.is_none() {
                    self.add_log("Spanish strings unavailable, staying in English".to_string());
                }
                self.translations = spanish.unwrap_or_else(|| self.english.clone());
                self.add_log(format!("language = {}", self.translations.0.lang()));
                self.lang = lang;
                true
            }
            Msg::StartSimulation => {
                self.add_log("Simulating progress".to_string());
                self.set_percent(0);
                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(TICK_MS, move || {
                    link.send_message(Msg::Tick);
                }));
                true
            }
            Msg::Tick => {
                let current = Progress::from(&self.progress).percent().unwrap_or(0);
                let next = current.saturating_add(STEP).min(100);
                self.set_percent(next);
                if next == 100 {
                    self.ticker = None;
                    self.add_log("Simulation finished".to_string());
                }
                true
            }
            Msg::Remount => {
                // A new key drops the old bar together with its text latch.
                self.mount += 1;
                self.add_log(format!("Remounted progress bar #{}", self.mount));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let text = (!self.text.is_empty()).then(|| AttrValue::from(self.text.clone()));
        let a11y_text = (!self.a11y_text.is_empty()).then(|| AttrValue::from(self.a11y_text.clone()));

        html! {
            <ContextProvider<Translations> context={self.translations.clone()}>
                <div class="app-container">
                    <header>
                        <h1>{ "Progress Bar" }</h1>
                    </header>

                    <main>
                        <div class="panel">
                            <h2>{ "Inputs" }</h2>
                            <div class="settings-grid">
                                <ProgressControls
                                    progress={self.progress_input.clone()}
                                    text={self.text.clone()}
                                    a11y_text={self.a11y_text.clone()}
                                    lang={self.lang.clone()}
                                    on_progress_change={ctx.link().callback(Msg::SetProgress)}
                                    on_text_change={ctx.link().callback(Msg::SetText)}
                                    on_a11y_text_change={ctx.link().callback(Msg::SetA11yText)}
                                    on_lang_change={ctx.link().callback(Msg::SetLanguage)}
                                    disabled={self.ticker.is_some()}
                                />
                            </div>

                            <div class="button-container">
                                <button
                                    onclick={ctx.link().callback(|_| Msg::StartSimulation)}
                                    disabled={self.ticker.is_some()}
                                    class="simulate-button"
                                >
                                    { "Simulate" }
                                </button>
                                <button
                                    onclick={ctx.link().callback(|_| Msg::Remount)}
                                    class="remount-button"
                                >
                                    { "Remount" }
                                </button>
                            </div>
                        </div>

                        <div class="panel">
                            <h2 id="progress-heading">{ "Progress" }</h2>
                            <ProgressBar
                                key={self.mount.to_string()}
                                progress={self.progress.clone()}
                                text={text}
                                a11y_text={a11y_text}
                                described_by="progress-heading"
                            />

                            <h2>{ "Logs" }</h2>
                            <div class="logs-container">
                                {
                                    for self.logs.iter().map(|log| {
                                        html! { <div class="log-entry">{ log }</div> }
                                    })
                                }
                            </div>
                        </div>
                    </main>
                </div>
            </ContextProvider<Translations>>
        }
    }
}

impl App {
    fn set_percent(&mut self, percent: u32) {
        self.progress = ProgressValue::from(percent);
        self.progress_input = percent.to_string();
    }

    fn add_log(&mut self, message: String) {
        log!(&message);
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        self.logs.push(format!("[{}] {}", timestamp, message));
    }
}

fn load_spanish() -> Result<Catalog, CatalogError> {
    let english = Catalog::english();
    Ok(Catalog::from_json("es", SPANISH)?.with_fallback(&english))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translate;
    use crate::progress::PERCENTAGE_KEY;

    #[test]
    fn bundled_spanish_strings_load() {
        let catalog = load_spanish().unwrap();
        assert_eq!(catalog.lang(), "es");
        assert_eq!(catalog.instant(PERCENTAGE_KEY, &[("$a", "40")]), "40 %");
        assert_eq!(catalog.instant("core.uploading", &[]), "Subiendo");
    }
}
