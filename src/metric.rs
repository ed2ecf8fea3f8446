use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("pet_clinic_statds")
        .with_description("Pet clinic app statistics")
        .with_unit("event")
        .build()
});

fn incr_statds(metric: &'static str, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_booking_status_statds(kind: &str, status: &str) {
    incr_statds("booking_status", format!("{kind}:{status}"))
}

pub fn incr_notification_statds(action: &str) {
    incr_statds("notification", action.into())
}

pub fn incr_user_action_statds(action: &str) {
    incr_statds("user_action", action.into())
}

pub fn incr_model_operation_statds(model: &str, operation: &str) {
    incr_statds("model_operation", format!("{model}.{operation}"))
}
