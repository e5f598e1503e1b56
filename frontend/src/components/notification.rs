use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{TOAST_DISPLAY_MS, TOAST_EXIT_MS};
use crate::dom;

const STYLE_BLOCK_ID: &str = "notification-styles";
const KEYFRAMES: &str = r#"
    @keyframes slideInRight {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Success => "fas fa-check-circle",
        }
    }

    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "#3B82F6",
            ToastKind::Success => "#10B981",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
    pub phase: ToastPhase,
}

/// Holds at most one toast. Showing a new one evicts the current one.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    next_id: ToastId,
    current: Option<Toast>,
}

impl NotificationSlot {
    pub fn show(&mut self, notice: Notice) -> (ToastId, Option<Toast>) {
        self.next_id += 1;
        let id = self.next_id;
        let evicted = self.current.replace(Toast {
            id,
            notice,
            phase: ToastPhase::Showing,
        });
        (id, evicted)
    }

    /// Starts the exit transition. Ignored unless `id` is still displayed.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match &mut self.current {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Showing => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().map(|t| t.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// The transition due for the displayed toast and how long until it fires.
    pub fn next_step(&self) -> Option<(u32, ToastMsg)> {
        let toast = self.current.as_ref()?;
        Some(match toast.phase {
            ToastPhase::Showing => (TOAST_DISPLAY_MS, ToastMsg::Leave(toast.id)),
            ToastPhase::Leaving => (TOAST_EXIT_MS, ToastMsg::Remove(toast.id)),
        })
    }
}

/// Handle components use to raise a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<Notice>);

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        self.0.emit(Notice::new(message, kind));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastMsg {
    Show(Notice),
    Leave(ToastId),
    Remove(ToastId),
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides a [`Notifier`] to its children and renders the single toast slot.
pub struct ToastHost {
    slot: NotificationSlot,
    notifier: Notifier,
    // Replacing or dropping this cancels the pending transition.
    timer: Option<Timeout>,
}

impl Component for ToastHost {
    type Message = ToastMsg;
    type Properties = ToastHostProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            slot: NotificationSlot::default(),
            notifier: Notifier(ctx.link().callback(ToastMsg::Show)),
            timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ToastMsg::Show(notice) => {
                if let Err(e) = dom::ensure_style_block(STYLE_BLOCK_ID, KEYFRAMES) {
                    log::warn!("{}", e);
                }
                let (id, evicted) = self.slot.show(notice);
                if let Some(old) = evicted {
                    log::debug!("toast {} replaced by {}", old.id, id);
                }
                self.schedule(ctx);
                true
            }
            ToastMsg::Leave(id) => {
                if !self.slot.begin_exit(id) {
                    return false;
                }
                self.schedule(ctx);
                true
            }
            ToastMsg::Remove(id) => {
                if !self.slot.remove(id) {
                    return false;
                }
                self.timer = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Notifier> context={self.notifier.clone()}>
                { for ctx.props().children.iter() }
                if let Some(toast) = self.slot.current() {
                    { render_toast(toast) }
                }
            </ContextProvider<Notifier>>
        }
    }
}

impl ToastHost {
    fn schedule(&mut self, ctx: &Context<Self>) {
        self.timer = self.slot.next_step().map(|(delay_ms, msg)| {
            let link = ctx.link().clone();
            Timeout::new(delay_ms, move || link.send_message(msg))
        });
    }
}

fn render_toast(toast: &Toast) -> Html {
    let kind = toast.notice.kind;
    let animation = match toast.phase {
        ToastPhase::Showing => "slideInRight 0.3s ease",
        ToastPhase::Leaving => "slideInRight 0.3s ease reverse",
    };
    let style = format!(
        "position: fixed; bottom: 100px; right: 30px; padding: 16px 24px; \
         background: {}; color: white; border-radius: 12px; display: flex; \
         align-items: center; gap: 12px; font-weight: 500; \
         box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2); z-index: 10000; animation: {};",
        kind.background(),
        animation
    );

    html! {
        <div key={toast.id.to_string()} class={classes!("notification-toast", kind.class())} style={style}>
            <i class={kind.icon()}></i>
            <span>{ &toast.notice.message }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_notice_evicts_the_first() {
        let mut slot = NotificationSlot::default();
        let (first, evicted) = slot.show(Notice::new("saved", ToastKind::Info));
        assert!(evicted.is_none());

        let (second, evicted) = slot.show(Notice::new("sent", ToastKind::Success));
        assert_eq!(evicted.map(|t| t.id), Some(first));

        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.notice, Notice::new("sent", ToastKind::Success));
    }

    #[test]
    fn stale_timers_do_not_touch_the_successor() {
        let mut slot = NotificationSlot::default();
        let (first, _) = slot.show(Notice::new("one", ToastKind::Info));
        let (second, _) = slot.show(Notice::new("two", ToastKind::Info));

        assert!(!slot.begin_exit(first));
        assert!(!slot.remove(first));
        assert_eq!(slot.current().map(|t| t.id), Some(second));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Showing);
    }

    #[test]
    fn exit_then_remove_empties_the_slot() {
        let mut slot = NotificationSlot::default();
        let (id, _) = slot.show(Notice::new("bye", ToastKind::Success));

        assert!(slot.begin_exit(id));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);
        // exit is only started once
        assert!(!slot.begin_exit(id));

        assert!(slot.remove(id));
        assert!(slot.current().is_none());
    }

    /// Fires the scheduled transitions in order, returning the elapsed time
    /// at which each one lands and the phase it leaves behind.
    fn run_schedule(slot: &mut NotificationSlot) -> Vec<(u32, Option<ToastPhase>)> {
        let mut elapsed = 0;
        let mut trace = Vec::new();
        while let Some((delay_ms, msg)) = slot.next_step() {
            elapsed += delay_ms;
            match msg {
                ToastMsg::Leave(id) => assert!(slot.begin_exit(id)),
                ToastMsg::Remove(id) => assert!(slot.remove(id)),
                ToastMsg::Show(_) => unreachable!("slot never schedules a show"),
            }
            trace.push((elapsed, slot.current().map(|t| t.phase)));
        }
        trace
    }

    #[test]
    fn toast_is_gone_after_display_plus_exit() {
        let mut slot = NotificationSlot::default();
        slot.show(Notice::new("hello", ToastKind::Info));

        let trace = run_schedule(&mut slot);
        assert_eq!(
            trace,
            vec![(4000, Some(ToastPhase::Leaving)), (4300, None)]
        );
        assert!(slot.current().is_none());
        assert!(slot.next_step().is_none());
    }

    #[test]
    fn schedule_follows_the_displayed_toast() {
        let mut slot = NotificationSlot::default();
        let (first, _) = slot.show(Notice::new("one", ToastKind::Info));
        assert_eq!(slot.next_step(), Some((TOAST_DISPLAY_MS, ToastMsg::Leave(first))));

        slot.begin_exit(first);
        let (second, _) = slot.show(Notice::new("two", ToastKind::Success));
        // a fresh toast restarts the full display window
        assert_eq!(slot.next_step(), Some((TOAST_DISPLAY_MS, ToastMsg::Leave(second))));
    }

    #[test]
    fn stale_remove_keeps_the_live_toast() {
        let mut slot = NotificationSlot::default();
        let (first, _) = slot.show(Notice::new("one", ToastKind::Info));
        slot.begin_exit(first);
        let (second, _) = slot.show(Notice::new("two", ToastKind::Info));

        assert!(!slot.remove(first));
        assert_eq!(slot.next_step(), Some((TOAST_DISPLAY_MS, ToastMsg::Leave(second))));
    }

    #[test]
    fn kinds_pick_their_icon() {
        assert_eq!(ToastKind::Success.icon(), "fas fa-check-circle");
        assert_eq!(ToastKind::Info.icon(), "fas fa-info-circle");
    }
}
