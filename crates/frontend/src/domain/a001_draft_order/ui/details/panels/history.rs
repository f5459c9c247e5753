//! Order history with the note form

use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use contracts::domain::a001_draft_order::{NoteFormData, OrderEvent, OrderEventType};
use leptos::prelude::*;
use thaw::*;

/// Human readable description of a history entry
pub fn event_message(event: &OrderEvent) -> String {
    let quantity = event.quantity.unwrap_or_default();
    match event.event_type {
        OrderEventType::DraftCreated => "Draft order was created".to_string(),
        OrderEventType::Placed => "Order was placed".to_string(),
        OrderEventType::PlacedFromDraft => "Order was placed from draft".to_string(),
        OrderEventType::OrderMarkedAsPaid => "Order was marked as paid".to_string(),
        OrderEventType::Canceled => "Order was cancelled".to_string(),
        OrderEventType::PaymentCaptured => "Payment was captured".to_string(),
        OrderEventType::PaymentRefunded => "Payment was refunded".to_string(),
        OrderEventType::PaymentReleased => "Payment was released".to_string(),
        OrderEventType::EmailSent => match event.email.as_deref() {
            Some(email) => format!("Email was sent to {email}"),
            None => "Email was sent".to_string(),
        },
        OrderEventType::FulfillmentCanceled => "Fulfillment was cancelled".to_string(),
        OrderEventType::FulfillmentRestockedItems => format!("Restocked {quantity} items"),
        OrderEventType::FulfillmentFulfilledItems => format!("Fulfilled {quantity} items"),
        OrderEventType::TrackingUpdated => "Tracking number was updated".to_string(),
        OrderEventType::NoteAdded | OrderEventType::Other => {
            event.message.clone().unwrap_or_default()
        }
        OrderEventType::Updated => "Order details were updated".to_string(),
    }
}

/// Note payload, `None` for blank text
pub fn note_payload(text: &str) -> Option<NoteFormData> {
    let message = text.trim();
    (!message.is_empty()).then(|| NoteFormData {
        message: message.to_string(),
    })
}

/// History is delivered oldest first and shown newest first
pub fn newest_first(events: &[OrderEvent]) -> Vec<OrderEvent> {
    events.iter().rev().cloned().collect()
}

#[component]
pub fn OrderHistory(
    #[prop(into)]
    history: Signal<Option<Vec<OrderEvent>>>,
    on_note_add: Callback<NoteFormData>,
) -> impl IntoView {
    let config = use_config();
    let date_format = StoredValue::new(config.display.date_format);
    let note = RwSignal::new(String::new());

    let handle_send = move |_| {
        if let Some(data) = note_payload(&note.get_untracked()) {
            on_note_add.run(data);
            note.set(String::new());
        }
    };

    view! {
        <div class="order-history">
            <h4 class="details-section__title">"Order history"</h4>
            <Flex vertical=true gap=FlexGap::Small>
                <Textarea value=note placeholder="Note" attr:rows=3 />
                <div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || note.get().trim().is_empty())
                        on_click=handle_send
                    >
                        "Send"
                    </Button>
                </div>
            </Flex>
            {move || match history.get() {
                Some(events) if !events.is_empty() => view! {
                    <ul class="order-history__list">
                        {newest_first(&events)
                            .into_iter()
                            .map(|event| {
                                let date = event
                                    .date
                                    .as_ref()
                                    .map(|d| date_format.with_value(|f| format_datetime(d, f)))
                                    .unwrap_or_default();
                                let entry_class = if event.event_type == OrderEventType::NoteAdded {
                                    "order-history__entry order-history__entry--note"
                                } else {
                                    "order-history__entry"
                                };
                                view! {
                                    <li class=entry_class>
                                        <div class="order-history__date">{date}</div>
                                        <div class="order-history__message">{event_message(&event)}</div>
                                        {event.user_email.clone().map(|email| view! {
                                            <div class="order-history__author">{email}</div>
                                        })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
                _ => view! { <div class="details-section__empty">"No events yet"</div> }.into_any(),
            }}
        </div>
    }
}
