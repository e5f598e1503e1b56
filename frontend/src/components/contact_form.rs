use std::collections::BTreeMap;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notice, Notifier, ToastKind};
use crate::config::SUBMIT_DELAY_MS;
use crate::error::{Result, SiteError};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will contact you soon.";

/// Every named control in the form, captured even when left blank.
pub const FIELDS: &[&str] = &["name", "email", "company", "phone", "subject", "message"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
}

/// What a submit hands to the sender: the captured fields and how long
/// the simulated send takes.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub fields: BTreeMap<String, String>,
    pub delay_ms: u32,
}

/// Field values plus the submit control's state.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactDraft {
    fields: BTreeMap<String, String>,
    phase: SubmitPhase,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            fields: FIELDS
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            phase: SubmitPhase::Idle,
        }
    }
}

impl ContactDraft {
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }

    /// Captures every field and moves to `Sending`.
    pub fn begin_submit(&mut self) -> Result<Submission> {
        if self.phase == SubmitPhase::Sending {
            return Err(SiteError::SubmissionInFlight);
        }
        self.phase = SubmitPhase::Sending;
        Ok(Submission {
            fields: self.fields.clone(),
            delay_ms: SUBMIT_DELAY_MS,
        })
    }

    /// Finishes the send: blanks every field, restores the submit control
    /// and returns the notice to show.
    pub fn complete(&mut self) -> Notice {
        *self = Self::default();
        Notice::new(SUCCESS_MESSAGE, ToastKind::Success)
    }
}

/// `(name, value)` of whichever form control fired the event.
fn control_value(target: Option<EventTarget>) -> Option<(String, String)> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

pub enum ContactMsg {
    SetField(String, String),
    Submit,
    Sent,
}

pub struct ContactForm {
    draft: ContactDraft,
    // Dropping this cancels the simulated send.
    pending: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: ContactDraft::default(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(name, value) => {
                self.draft.set_field(name, value);
                true
            }
            ContactMsg::Submit => {
                let submission = match self.draft.begin_submit() {
                    Ok(submission) => submission,
                    Err(e) => {
                        log::warn!("{}", e);
                        return false;
                    }
                };
                match serde_json::to_string(&submission.fields) {
                    Ok(json) => log::debug!("contact form captured: {}", json),
                    Err(e) => log::warn!("could not serialize contact form: {}", e),
                }

                // Simulated send; a real endpoint would go here.
                let link = ctx.link().clone();
                self.pending = Some(Timeout::new(submission.delay_ms, move || {
                    link.send_message(ContactMsg::Sent);
                }));
                true
            }
            ContactMsg::Sent => {
                self.pending = None;
                let notice = self.draft.complete();
                match ctx.link().context::<Notifier>(Callback::noop()) {
                    Some((notifier, _)) => notifier.notify(notice.message, notice.kind),
                    None => log::warn!("{}", SiteError::missing("notification host")),
                }
                log::info!("contact form reset after send");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            control_value(e.target()).map(|(name, value)| ContactMsg::SetField(name, value))
        });
        let draft = &self.draft;

        html! {
            <form id="contactForm" class="contact-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="name">{"Full Name"}</label>
                        <input type="text" id="name" name="name" required=true
                            value={draft.field("name").to_string()} oninput={oninput.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email Address"}</label>
                        <input type="email" id="email" name="email" required=true
                            value={draft.field("email").to_string()} oninput={oninput.clone()} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="company">{"Company"}</label>
                        <input type="text" id="company" name="company"
                            value={draft.field("company").to_string()} oninput={oninput.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Phone"}</label>
                        <input type="tel" id="phone" name="phone"
                            value={draft.field("phone").to_string()} oninput={oninput.clone()} />
                    </div>
                </div>
                <div class="form-group">
                    <label for="subject">{"Subject"}</label>
                    <input type="text" id="subject" name="subject"
                        value={draft.field("subject").to_string()} oninput={oninput.clone()} />
                </div>
                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea id="message" name="message" rows="5" required=true
                        value={draft.field("message").to_string()} {oninput} />
                </div>
                <button type="submit" class="btn btn-primary btn-submit" disabled={draft.submit_disabled()}>
                    if draft.submit_disabled() {
                        <i class="fas fa-spinner fa-spin"></i>
                    } else {
                        <i class="fas fa-paper-plane"></i>
                    }
                    { " " }{ draft.submit_label() }
                </button>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::NotificationSlot;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set_field("name", "Ada Shaw");
        draft.set_field("email", "ada@example.com");
        draft.set_field("message", "Need 40 pallets of M8 bolts");
        draft
    }

    #[test]
    fn submit_disables_and_shows_sending_label() {
        let mut draft = filled();
        assert_eq!(draft.submit_label(), SUBMIT_LABEL);
        assert!(!draft.submit_disabled());

        let submission = draft.begin_submit().unwrap();
        assert_eq!(submission.fields["email"], "ada@example.com");

        assert_eq!(draft.phase(), SubmitPhase::Sending);
        assert!(draft.submit_disabled());
        assert_eq!(draft.submit_label(), SENDING_LABEL);
    }

    #[test]
    fn send_is_scheduled_after_the_fixed_delay() {
        let submission = filled().begin_submit().unwrap();
        assert_eq!(submission.delay_ms, 1500);
        assert_eq!(submission.delay_ms, SUBMIT_DELAY_MS);
    }

    #[test]
    fn untouched_fields_are_captured_blank() {
        let mut draft = ContactDraft::default();
        draft.set_field("name", "Ada Shaw");
        let submission = draft.begin_submit().unwrap();

        let keys: Vec<&str> = submission.fields.keys().map(String::as_str).collect();
        let mut expected = FIELDS.to_vec();
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(submission.fields["name"], "Ada Shaw");
        assert_eq!(submission.fields["email"], "");
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut draft = filled();
        draft.begin_submit().unwrap();
        assert_eq!(draft.begin_submit(), Err(SiteError::SubmissionInFlight));
    }

    #[test]
    fn completing_restores_control_clears_fields_and_yields_one_success() {
        let mut draft = filled();
        draft.begin_submit().unwrap();

        let notice = draft.complete();
        assert_eq!(notice, Notice::new(SUCCESS_MESSAGE, ToastKind::Success));

        assert!(!draft.submit_disabled());
        assert_eq!(draft.submit_label(), SUBMIT_LABEL);
        assert!(FIELDS.iter().all(|name| draft.field(name).is_empty()));
        assert_eq!(draft, ContactDraft::default());

        // the host slot ends up holding exactly that notice
        let mut toasts = NotificationSlot::default();
        toasts.show(notice.clone());
        assert_eq!(toasts.current().map(|t| &t.notice), Some(&notice));
    }

    #[test]
    fn captured_fields_serialize_as_a_flat_map() {
        let mut draft = filled();
        let submission = draft.begin_submit().unwrap();
        let json = serde_json::to_value(&submission.fields).unwrap();
        assert_eq!(json["name"], "Ada Shaw");
        assert_eq!(json["phone"], "");
    }
}
