use yew::context::ContextHandle;
use yew::prelude::*;

use crate::i18n::{Translate, Translations};
use crate::progress::{ChangeSet, Inputs, ProgressState, ProgressValue, PERCENTAGE_KEY};

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Percentage from 0 to 100, as a number or a numeral.
    pub progress: ProgressValue,
    /// Text shown next to the bar. Defaults to the percentage.
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Translation key read out before the percentage.
    #[prop_or_default]
    pub a11y_text: Option<AttrValue>,
    /// Id of the element describing this progress, if any.
    #[prop_or_default]
    pub described_by: Option<AttrValue>,
}

impl ProgressBarProps {
    fn inputs(&self) -> Inputs<'_> {
        Inputs {
            progress: &self.progress,
            text: self.text.as_deref(),
            a11y_text: self.a11y_text.as_deref(),
        }
    }
}

pub enum Msg {
    TranslationsChanged(Translations),
}

/// Progress bar with a percentage label and an accessible value text.
///
/// ```ignore
/// html! { <ProgressBar progress={percentage} /> }
/// ```
///
/// Negative or unreadable progress renders an indeterminate bar without a
/// value. `aria-valuenow` never exceeds 100, even when the width does.
pub struct ProgressBar {
    state: ProgressState,
    translations: Translations,
    _translations_handle: Option<ContextHandle<Translations>>,
}

impl Component for ProgressBar {
    type Message = Msg;
    type Properties = ProgressBarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (translations, handle) = match ctx
            .link()
            .context::<Translations>(ctx.link().callback(Msg::TranslationsChanged))
        {
            Some((translations, handle)) => (translations, Some(handle)),
            None => (Translations::default(), None),
        };

        let mut state = ProgressState::new();
        let inputs = ctx.props().inputs();
        state.apply(ChangeSet::initial(&inputs), &inputs, &translations);

        Self {
            state,
            translations,
            _translations_handle: handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TranslationsChanged(translations) => {
                self.translations = translations;
                self.state
                    .retranslate(ctx.props().a11y_text.as_deref(), &self.translations);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let inputs = props.inputs();
        let changes = ChangeSet::between(&old_props.inputs(), &inputs);
        self.state.apply(changes, &inputs, &self.translations);

        !changes.is_empty() || old_props.described_by != props.described_by
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let value_text = self
            .state
            .value_text()
            .map(|text| AttrValue::from(text.to_string()));
        let described_by = ctx.props().described_by.clone();

        let (Some(percent), Some(width)) = (self.state.progress().percent(), self.state.width())
        else {
            return html! {
                <div class="core-progress-bar core-progress-bar-indeterminate">
                    <div
                        class="core-progress-bar-track"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuetext={value_text}
                        aria-describedby={described_by}
                    >
                        <div class="core-progress-bar-fill"></div>
                    </div>
                </div>
            };
        };

        let label = self.translations.instant(
            PERCENTAGE_KEY,
            &[("$a", self.state.text().unwrap_or_default())],
        );

        html! {
            <div class="core-progress-bar">
                <div
                    class="core-progress-bar-track"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow={percent.min(100).to_string()}
                    aria-valuetext={value_text}
                    aria-describedby={described_by}
                >
                    <div class="core-progress-bar-fill" style={width.declaration()}></div>
                </div>
                <div class="core-progress-text" aria-hidden="true">{ label }</div>
            </div>
        }
    }
}
