use crate::modules::events::adapters::outbound::row::CreateEventInput;
use crate::modules::events::use_cases::submit_event::command::SubmitEvent;
use crate::shared::core::instant::parse_instant;
use crate::tests::fixtures::events::EventBuilder;

pub const FIXED_SUBMITTED_AT: &str = "2024-06-01T10:00:00.000Z";

#[derive(Clone)]
pub struct SubmitEventBuilder {
    inner: SubmitEvent,
}

impl Default for SubmitEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitEventBuilder {
    /// A meetup on 2024-06-15 without an id or audit timestamps.
    pub fn new() -> Self {
        let event = EventBuilder::new()
            .event_start("2024-06-15T09:00:00.000Z")
            .event_end("2024-06-15T18:00:00.000Z")
            .build();
        let mut input = CreateEventInput::from(event);
        input.id = None;
        input.created_at = None;
        input.updated_at = None;

        Self {
            inner: SubmitEvent {
                input,
                custom_vendor: None,
                submitted_at: parse_instant(FIXED_SUBMITTED_AT)
                    .unwrap_or_else(|| panic!("fixture instant must parse")),
            },
        }
    }

    pub fn with_input(mut self, f: impl FnOnce(&mut CreateEventInput)) -> Self {
        f(&mut self.inner.input);
        self
    }

    pub fn custom_vendor(mut self, v: Option<&str>) -> Self {
        self.inner.custom_vendor = v.map(str::to_string);
        self
    }

    pub fn submitted_at(mut self, v: &str) -> Self {
        self.inner.submitted_at =
            parse_instant(v).unwrap_or_else(|| panic!("fixture instant {v:?} must parse"));
        self
    }

    pub fn build(self) -> SubmitEvent {
        self.inner
    }
}
