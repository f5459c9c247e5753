use crate::shared::components::ui::{Choice, SingleSelectField, TextField};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_draft_order::{Address, AddressInput, CountryChoice};
use contracts::domain::common::user_error::field_error;
use contracts::domain::common::UserError;
use leptos::prelude::*;
use thaw::*;

/// Address form fields as named by the mutation layer, with their labels
pub const ADDRESS_FIELDS: [(&str, &str); 11] = [
    ("firstName", "First name"),
    ("lastName", "Last name"),
    ("companyName", "Company"),
    ("phone", "Phone"),
    ("streetAddress1", "Address line 1"),
    ("streetAddress2", "Address line 2"),
    ("city", "City"),
    ("cityArea", "City area"),
    ("postalCode", "ZIP / Postal code"),
    ("country", "Country"),
    ("countryArea", "Country area"),
];

pub fn address_field<'a>(input: &'a AddressInput, key: &str) -> &'a str {
    match key {
        "firstName" => &input.first_name,
        "lastName" => &input.last_name,
        "companyName" => &input.company_name,
        "phone" => &input.phone,
        "streetAddress1" => &input.street_address_1,
        "streetAddress2" => &input.street_address_2,
        "city" => &input.city,
        "cityArea" => &input.city_area,
        "postalCode" => &input.postal_code,
        "country" => &input.country,
        "countryArea" => &input.country_area,
        _ => "",
    }
}

pub fn set_address_field(input: &mut AddressInput, key: &str, value: String) {
    let slot = match key {
        "firstName" => &mut input.first_name,
        "lastName" => &mut input.last_name,
        "companyName" => &mut input.company_name,
        "phone" => &mut input.phone,
        "streetAddress1" => &mut input.street_address_1,
        "streetAddress2" => &mut input.street_address_2,
        "city" => &mut input.city,
        "cityArea" => &mut input.city_area,
        "postalCode" => &mut input.postal_code,
        "country" => &mut input.country,
        "countryArea" => &mut input.country_area,
        _ => return,
    };
    *slot = value;
}

pub fn is_address_field(field: &str) -> bool {
    ADDRESS_FIELDS.iter().any(|(key, _)| *key == field)
}

pub fn has_address_field_errors(errors: &[UserError]) -> bool {
    errors
        .iter()
        .any(|e| e.field.as_deref().is_some_and(is_address_field))
}

/// A form reopened after a rejected save keeps what the user typed
pub fn keeps_rejected_input(submitted: bool, errors: &[UserError]) -> bool {
    submitted && has_address_field_errors(errors)
}

pub fn country_choices(countries: &[CountryChoice]) -> Vec<Choice> {
    countries
        .iter()
        .map(|c| Choice::new(c.label.clone(), c.code.clone()))
        .collect()
}

/// Edit form for the billing or shipping address of the draft
#[component]
pub fn OrderAddressEditDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    /// Address the form starts from
    #[prop(into)]
    address: Signal<Option<Address>>,
    #[prop(into)]
    countries: Signal<Vec<CountryChoice>>,
    #[prop(into)]
    errors: Signal<Vec<UserError>>,
    on_close: Callback<()>,
    on_confirm: Callback<AddressInput>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let form = RwSignal::new(AddressInput::default());
    let submitted = RwSignal::new(false);

    // Refill the form from the current address on open, unless the last save was rejected
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        if errors.with_untracked(|e| keeps_rejected_input(submitted.get_untracked(), e)) {
            return;
        }
        let initial = address
            .get_untracked()
            .as_ref()
            .map(AddressInput::from)
            .unwrap_or_default();
        form.set(initial);
        submitted.set(false);
    });

    let choices = Signal::derive(move || country_choices(&countries.get()));
    let error_for = move |key: &'static str| {
        Signal::derive(move || field_error(&errors.get(), key).map(str::to_string))
    };

    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=on_close modal_class="dialog">
                <div class="dialog__title">{title.get_value()}</div>
                <div class="dialog__content address-form">
                    {ADDRESS_FIELDS
                        .iter()
                        .filter(|(key, _)| *key != "country")
                        .map(|&(key, label)| {
                            view! {
                                <TextField
                                    name=key
                                    label=label
                                    value=Signal::derive(move || address_field(&form.get(), key).to_string())
                                    on_input=Callback::new(move |value: String| {
                                        form.update(|f| set_address_field(f, key, value))
                                    })
                                    error=error_for(key)
                                />
                            }
                        })
                        .collect_view()}
                    <SingleSelectField
                        name="country"
                        label="Country"
                        value=Signal::derive(move || form.get().country)
                        choices=choices
                        placeholder="Select country"
                        on_change=Callback::new(move |code: String| {
                            form.update(|f| f.country = code)
                        })
                        error=error_for("country")
                    />
                </div>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            submitted.set(true);
                            on_confirm.run(form.get_untracked());
                        }
                    >
                        "Save"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_round_trips_through_setter() {
        let mut input = AddressInput::default();
        for (key, _) in ADDRESS_FIELDS {
            set_address_field(&mut input, key, format!("value of {key}"));
        }
        for (key, _) in ADDRESS_FIELDS {
            assert_eq!(address_field(&input, key), format!("value of {key}"));
        }
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut input = AddressInput::default();
        set_address_field(&mut input, "planet", "Mars".into());
        assert_eq!(input, AddressInput::default());
        assert_eq!(address_field(&input, "planet"), "");
    }

    #[test]
    fn test_address_field_errors() {
        let errors = vec![
            UserError::new(None, "Order is not valid"),
            UserError::new(Some("lines"), "Insufficient stock"),
        ];
        assert!(!has_address_field_errors(&errors));
        assert!(has_address_field_errors(&[UserError::new(
            Some("postalCode"),
            "Invalid postal code"
        )]));
    }

    #[test]
    fn test_rejected_input_is_kept_only_after_save() {
        let rejected = vec![UserError::new(Some("postalCode"), "Invalid postal code")];
        assert!(keeps_rejected_input(true, &rejected));
        assert!(!keeps_rejected_input(false, &rejected));
        assert!(!keeps_rejected_input(true, &[]));
        assert!(!keeps_rejected_input(true, &[UserError::new(None, "Order is not valid")]));
    }

    #[test]
    fn test_country_choices() {
        let countries = vec![
            CountryChoice {
                code: "PL".into(),
                label: "Poland".into(),
            },
            CountryChoice {
                code: "DE".into(),
                label: "Germany".into(),
            },
        ];
        assert_eq!(
            country_choices(&countries),
            vec![Choice::new("Poland", "PL"), Choice::new("Germany", "DE")]
        );
    }
}
