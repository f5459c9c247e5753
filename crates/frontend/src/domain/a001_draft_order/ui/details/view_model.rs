//! ViewModel for the draft order page

use crate::domain::a001_draft_order::ui::dialogs::address_edit::is_address_field;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a001_draft_order::{OrderDetails, ShippingMethodFormData};
use contracts::domain::common::UserError;
use leptos::prelude::*;

/// Dialogs the draft order page can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftDialog {
    BillingAddressEdit,
    DraftFinalize,
    DraftRemove,
    OrderLineAdd,
    ShippingAddressEdit,
    ShippingMethodEdit,
}

impl DraftDialog {
    pub const ALL: [DraftDialog; 6] = [
        DraftDialog::BillingAddressEdit,
        DraftDialog::DraftFinalize,
        DraftDialog::DraftRemove,
        DraftDialog::OrderLineAdd,
        DraftDialog::ShippingAddressEdit,
        DraftDialog::ShippingMethodEdit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftDialog::BillingAddressEdit => "billing_address_edit",
            DraftDialog::DraftFinalize => "draft_finalize",
            DraftDialog::DraftRemove => "draft_remove",
            DraftDialog::OrderLineAdd => "order_line_add",
            DraftDialog::ShippingAddressEdit => "shipping_address_edit",
            DraftDialog::ShippingMethodEdit => "shipping_method_edit",
        }
    }
}

/// Visibility of the page dialogs.
///
/// Flags are independent: opening one dialog does not close another.
// Allow: one independent toggle per dialog.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogFlags {
    pub billing_address_edit: bool,
    pub draft_finalize: bool,
    pub draft_remove: bool,
    pub order_line_add: bool,
    pub shipping_address_edit: bool,
    pub shipping_method_edit: bool,
}

impl DialogFlags {
    fn slot(&mut self, dialog: DraftDialog) -> &mut bool {
        match dialog {
            DraftDialog::BillingAddressEdit => &mut self.billing_address_edit,
            DraftDialog::DraftFinalize => &mut self.draft_finalize,
            DraftDialog::DraftRemove => &mut self.draft_remove,
            DraftDialog::OrderLineAdd => &mut self.order_line_add,
            DraftDialog::ShippingAddressEdit => &mut self.shipping_address_edit,
            DraftDialog::ShippingMethodEdit => &mut self.shipping_method_edit,
        }
    }

    pub fn is_open(&self, dialog: DraftDialog) -> bool {
        match dialog {
            DraftDialog::BillingAddressEdit => self.billing_address_edit,
            DraftDialog::DraftFinalize => self.draft_finalize,
            DraftDialog::DraftRemove => self.draft_remove,
            DraftDialog::OrderLineAdd => self.order_line_add,
            DraftDialog::ShippingAddressEdit => self.shipping_address_edit,
            DraftDialog::ShippingMethodEdit => self.shipping_method_edit,
        }
    }

    pub fn toggle(&mut self, dialog: DraftDialog) {
        let slot = self.slot(dialog);
        *slot = !*slot;
    }

    /// Address form errors are shown inside the dialog while it is open
    pub fn address_form_open(&self) -> bool {
        self.billing_address_edit || self.shipping_address_edit
    }
}

/// Reactive holder of [`DialogFlags`], owned by one page instance
#[derive(Clone, Copy)]
pub struct DraftOrderDialogs {
    pub flags: RwSignal<DialogFlags>,
}

impl DraftOrderDialogs {
    pub fn new() -> Self {
        Self {
            flags: RwSignal::new(DialogFlags::default()),
        }
    }

    pub fn toggle(&self, dialog: DraftDialog) {
        self.flags.update(|flags| flags.toggle(dialog));
        log::debug!(
            "draft order dialog {} is now {}",
            dialog.as_str(),
            if self.flags.get_untracked().is_open(dialog) { "open" } else { "closed" }
        );
    }

    pub fn is_open(&self, dialog: DraftDialog) -> Signal<bool> {
        let flags = self.flags;
        Signal::derive(move || flags.get().is_open(dialog))
    }

    /// Callback flipping `dialog`, for child components
    pub fn toggler(&self, dialog: DraftDialog) -> Callback<()> {
        let dialogs = *self;
        Callback::new(move |_| dialogs.toggle(dialog))
    }

    /// Callback forwarding the confirmed payload and closing `dialog`
    pub fn confirm_then_close<T>(&self, dialog: DraftDialog, action: Callback<T>) -> Callback<T>
    where
        T: Send + Sync + 'static,
    {
        let dialogs = *self;
        Callback::new(move |data: T| {
            action.run(data);
            dialogs.toggle(dialog);
        })
    }
}

impl Default for DraftOrderDialogs {
    fn default() -> Self {
        Self::new()
    }
}

/// Finalize is blocked by the caller or by an order without lines.
///
/// An order whose lines are not loaded yet is not blocked by the line rule.
pub fn finalize_disabled(disabled: bool, order: Option<&OrderDetails>) -> bool {
    disabled || order.and_then(OrderDetails::line_count) == Some(0)
}

/// "#17" once the order number is known
pub fn page_title(order: Option<&OrderDetails>) -> Option<String> {
    order
        .and_then(|o| o.number.as_deref())
        .filter(|number| !number.is_empty())
        .map(|number| format!("#{number}"))
}

/// Creation date caption; `None` means the skeleton is shown
pub fn created_caption(order: Option<&OrderDetails>, pattern: &str) -> Option<String> {
    order
        .and_then(|o| o.created.as_ref())
        .map(|created| format_datetime(created, pattern))
}

/// Current shipping method id of the order, empty when none is set
pub fn current_shipping_method(order: Option<&OrderDetails>) -> String {
    order
        .and_then(|o| o.shipping_method.as_ref())
        .map(|m| m.id.clone())
        .unwrap_or_default()
}

pub fn shipping_method_payload(selected: &str) -> Option<ShippingMethodFormData> {
    (!selected.is_empty()).then(|| ShippingMethodFormData {
        shipping_method: selected.to_string(),
    })
}

/// Errors for the banner: everything except what an open address form
/// already shows next to its fields
pub fn general_errors(errors: &[UserError], address_form_open: bool) -> Vec<UserError> {
    errors
        .iter()
        .filter(|e| match e.field.as_deref() {
            Some(field) if address_form_open => !is_address_field(field),
            _ => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_draft_order::ui::shipping_method_dialog::{
        preselected_choice, shipping_method_choices,
    };
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_draft_order::{AddressInput, OrderLine, ShippingMethod};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn line(id: &str) -> OrderLine {
        OrderLine {
            id: id.into(),
            product_name: "Apple Juice".into(),
            product_sku: None,
            variant_id: None,
            quantity: 1,
            unit_price: None,
            thumbnail_url: None,
        }
    }

    fn order_with_lines(count: usize) -> OrderDetails {
        OrderDetails {
            lines: Some((0..count).map(|i| line(&format!("line-{i}"))).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_finalize_disabled_without_lines() {
        let order = order_with_lines(0);
        assert!(finalize_disabled(false, Some(&order)));
        assert!(finalize_disabled(true, Some(&order)));
    }

    #[test]
    fn test_finalize_enabled_with_lines() {
        let order = order_with_lines(2);
        assert!(!finalize_disabled(false, Some(&order)));
        assert!(finalize_disabled(true, Some(&order)));
    }

    #[test]
    fn test_finalize_with_unloaded_lines() {
        assert!(!finalize_disabled(false, None));
        assert!(!finalize_disabled(false, Some(&OrderDetails::default())));
        assert!(finalize_disabled(true, None));
    }

    #[test]
    fn test_page_title() {
        let order = OrderDetails {
            number: Some("17".into()),
            ..Default::default()
        };
        assert_eq!(page_title(Some(&order)), Some("#17".to_string()));
        assert_eq!(page_title(Some(&OrderDetails::default())), None);
        assert_eq!(page_title(None), None);
    }

    #[test]
    fn test_created_caption() {
        let order = OrderDetails {
            created: Some(Utc.with_ymd_and_hms(2018, 9, 13, 14, 2, 26).unwrap()),
            ..Default::default()
        };
        assert_eq!(
            created_caption(Some(&order), "%d.%m.%Y %H:%M"),
            Some("13.09.2018 14:02".to_string())
        );
        assert_eq!(created_caption(Some(&OrderDetails::default()), "%d.%m.%Y"), None);
        assert_eq!(created_caption(None, "%d.%m.%Y"), None);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        for dialog in DraftDialog::ALL {
            let mut flags = DialogFlags::default();
            flags.toggle(dialog);
            assert!(flags.is_open(dialog));
            flags.toggle(dialog);
            assert_eq!(flags, DialogFlags::default());
        }
    }

    #[test]
    fn test_toggle_leaves_other_flags() {
        for dialog in DraftDialog::ALL {
            let mut flags = DialogFlags::default();
            flags.toggle(dialog);
            for other in DraftDialog::ALL.into_iter().filter(|d| *d != dialog) {
                assert!(!flags.is_open(other), "{} opened {}", dialog.as_str(), other.as_str());
            }
        }
    }

    #[test]
    fn test_flags_are_not_exclusive() {
        let mut flags = DialogFlags::default();
        flags.toggle(DraftDialog::DraftFinalize);
        flags.toggle(DraftDialog::DraftRemove);
        assert!(flags.draft_finalize && flags.draft_remove);
    }

    #[test]
    fn test_dialogs_signal_toggle() {
        let owner = Owner::new();
        owner.set();

        let dialogs = DraftOrderDialogs::new();
        let open = dialogs.is_open(DraftDialog::OrderLineAdd);
        assert!(!open.get_untracked());

        dialogs.toggler(DraftDialog::OrderLineAdd).run(());
        assert!(open.get_untracked());
        assert!(!dialogs.is_open(DraftDialog::DraftRemove).get_untracked());
    }

    #[test]
    fn test_confirm_then_close() {
        let owner = Owner::new();
        owner.set();

        let dialogs = DraftOrderDialogs::new();
        dialogs.toggle(DraftDialog::DraftRemove);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let on_remove = Callback::new(move |_: ()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        dialogs.confirm_then_close(DraftDialog::DraftRemove, on_remove).run(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!dialogs.flags.get_untracked().draft_remove);
    }

    #[test]
    fn test_confirm_then_close_forwards_payload() {
        let owner = Owner::new();
        owner.set();

        let dialogs = DraftOrderDialogs::new();
        dialogs.toggle(DraftDialog::ShippingMethodEdit);

        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let on_edit = Callback::new(move |data: ShippingMethodFormData| {
            *sink.lock().unwrap() = Some(data);
        });

        dialogs
            .confirm_then_close(DraftDialog::ShippingMethodEdit, on_edit)
            .run(ShippingMethodFormData {
                shipping_method: "B".into(),
            });
        assert_eq!(
            received.lock().unwrap().as_ref().map(|d| d.shipping_method.as_str()),
            Some("B")
        );
        assert_eq!(dialogs.flags.get_untracked(), DialogFlags::default());
    }

    #[test]
    fn test_current_shipping_method() {
        let order = OrderDetails {
            shipping_method: Some(ShippingMethod {
                id: "A".into(),
                name: "Air".into(),
                price: None,
            }),
            ..Default::default()
        };
        assert_eq!(current_shipping_method(Some(&order)), "A");
        assert_eq!(current_shipping_method(None), "");
    }

    #[test]
    fn test_dialog_opens_on_order_shipping_method() {
        let methods = vec![
            ShippingMethod {
                id: "A".into(),
                name: "Air".into(),
                price: None,
            },
            ShippingMethod {
                id: "B".into(),
                name: "Bus".into(),
                price: None,
            },
        ];
        let order = OrderDetails {
            shipping_method: Some(methods[1].clone()),
            available_shipping_methods: Some(methods.clone()),
            ..Default::default()
        };
        let choices = shipping_method_choices(order.available_shipping_methods.as_deref());

        let seeded = current_shipping_method(Some(&order));
        assert_eq!(preselected_choice(&choices, &seeded).map(|c| c.label.as_str()), Some("Bus"));
    }

    #[test]
    fn test_order_without_shipping_method_confirms_nothing() {
        let order = OrderDetails {
            available_shipping_methods: Some(vec![ShippingMethod {
                id: "A".into(),
                name: "Air".into(),
                price: None,
            }]),
            ..Default::default()
        };
        let choices = shipping_method_choices(order.available_shipping_methods.as_deref());

        let seeded = current_shipping_method(Some(&order));
        assert_eq!(preselected_choice(&choices, &seeded), None);
        assert_eq!(shipping_method_payload(&seeded), None);
    }

    #[test]
    fn test_shipping_method_payload() {
        assert_eq!(shipping_method_payload(""), None);
        assert_eq!(
            shipping_method_payload("A"),
            Some(ShippingMethodFormData {
                shipping_method: "A".into()
            })
        );
    }

    #[test]
    fn test_general_errors_skip_fields_of_open_address_form() {
        let errors = vec![
            UserError::new(None, "Order is not valid"),
            UserError::new(Some("city"), "City is required"),
            UserError::new(Some("lines"), "Insufficient stock"),
        ];
        let general = general_errors(&errors, true);
        assert_eq!(general.len(), 2);
        assert!(general.iter().all(|e| !e.is_for("city")));
        assert_eq!(general_errors(&errors, false), errors);
    }

    #[test]
    fn test_address_error_after_save_reaches_banner() {
        let owner = Owner::new();
        owner.set();

        let dialogs = DraftOrderDialogs::new();
        dialogs.toggle(DraftDialog::ShippingAddressEdit);
        assert!(dialogs.flags.get_untracked().address_form_open());

        let on_save = Callback::new(|_: AddressInput| {});
        dialogs
            .confirm_then_close(DraftDialog::ShippingAddressEdit, on_save)
            .run(AddressInput::default());

        let flags = dialogs.flags.get_untracked();
        assert!(!flags.address_form_open());

        let errors = vec![UserError::new(Some("postalCode"), "Invalid postal code")];
        let banner = general_errors(&errors, flags.address_form_open());
        assert_eq!(banner.len(), 1);
        assert!(banner[0].is_for("postalCode"));
    }
}
