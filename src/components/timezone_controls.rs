//! Zone pickers, conversion toggle, and the converted-times warning.

use leptos::prelude::*;

use crate::state::timezone::TimezoneState;
use crate::util::timezone::ZONES;

#[component]
fn ZoneSelect(label: &'static str, value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <label class="timezone-select">
            <span class="timezone-select__label">{label}</span>
            <select prop:value=move || value.get() on:change=move |ev| on_change.run(event_target_value(&ev))>
                {ZONES
                    .iter()
                    .map(|zone| view! { <option value=zone.id>{zone.label}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
pub fn TimezoneControls() -> impl IntoView {
    let timezone = expect_context::<RwSignal<TimezoneState>>();

    let from = Signal::derive(move || timezone.with(|tz| tz.from.clone()));
    let to = Signal::derive(move || timezone.with(|tz| tz.to.clone()));
    let on_from = Callback::new(move |zone: String| timezone.update(|tz| tz.set_from(&zone)));
    let on_to = Callback::new(move |zone: String| timezone.update(|tz| tz.set_to(&zone)));

    view! {
        <div class="timezone-controls">
            <ZoneSelect label="From" value=from on_change=on_from />
            <i class="fas fa-arrow-right timezone-controls__arrow"></i>
            <ZoneSelect label="To" value=to on_change=on_to />
            <label class="toggle-switch" title="Convert times">
                <input
                    id="convertToggleBtn"
                    type="checkbox"
                    prop:checked=move || timezone.with(|tz| tz.enabled)
                    on:change=move |ev| {
                        let enabled = event_target_checked(&ev);
                        timezone.update(|tz| tz.enabled = enabled);
                    }
                />
                <span class="toggle-switch__slider"></span>
                <span class="toggle-switch__label">"Convert"</span>
            </label>
        </div>
        {move || {
            timezone
                .with(TimezoneState::warning_text)
                .map(|text| {
                    view! {
                        <div class="timezone-warning">
                            <i class="fas fa-exclamation-triangle"></i>
                            " "
                            {text}
                        </div>
                    }
                })
        }}
    }
}
