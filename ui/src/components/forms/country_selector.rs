use dioxus::prelude::*;

use crate::features::registration::Country;
use crate::console_warn;

#[derive(Props, PartialEq, Clone)]
pub struct CountrySelectorProps {
    pub selected: Country,
    pub on_change: EventHandler<Country>,
}

#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            id: "country",
            name: "country",
            class: "input-field country-selector",
            value: "{selected.code()}",
            onchange: move |evt| match evt.value().parse::<Country>() {
                Ok(country) => on_change.call(country),
                Err(err) => console_warn!("[CountrySelector] {}", err),
            },
            for country in Country::ALL {
                option {
                    value: "{country.code()}",
                    selected: country == selected,
                    "{country.label()}"
                }
            }
        }
    }
}
