use crate::booking::flow::{AttemptId, BookingFlow};

/// Opens pages outside the site without keeping a handle on them.
pub trait ExternalNavigator {
    fn open_in_new_tab(&self, url: &str) -> bool;
}

pub struct BrowserNavigator;

impl ExternalNavigator for BrowserNavigator {
    fn open_in_new_tab(&self, url: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Could not open {}: {:?}", url, e);
                false
            }
        }
    }
}

/// A calendar hand-off that is owed to the visitor. Consumed by `open`, so
/// it can be delivered at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the visitor never sees the calendar unless the redirect is opened"]
pub struct CalendarRedirect {
    url: String,
}

impl CalendarRedirect {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns whether the browser accepted the new tab.
    pub fn open<N: ExternalNavigator>(self, navigator: &N) -> bool {
        navigator.open_in_new_tab(&self.url)
    }
}

/// Claims the calendar redirect for a successful attempt. The claim no
/// longer depends on the form, so it survives the overlay being closed.
pub fn claim_calendar_redirect(
    flow: &mut BookingFlow,
    attempt: AttemptId,
    calendar_url: &str,
) -> Option<CalendarRedirect> {
    flow.take_redirect(attempt).then(|| CalendarRedirect {
        url: calendar_url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::form_data::FormField;
    use crate::booking::lead_store::testing::RecordingStore;
    use crate::booking::lead_store::{persist_with_timeout, PersistError};
    use crate::config::CALENDAR_URL;
    use futures::executor::block_on;
    use futures::future::pending;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
        blocked: bool,
    }

    impl ExternalNavigator for RecordingNavigator {
        fn open_in_new_tab(&self, url: &str) -> bool {
            self.opened.borrow_mut().push(url.to_string());
            !self.blocked
        }
    }

    fn jane_doe(flow: &mut BookingFlow) {
        let form = flow.form_mut();
        form.set(FormField::FullName, "Jane Doe".into());
        form.set(FormField::Email, "jane@x.com".into());
        form.set(FormField::Industry, "Healthcare".into());
        form.set(FormField::CurrentChallenges, "Too much manual charting".into());
        form.toggle_help_topic("AI Integration");
    }

    #[test]
    fn jane_doe_books_and_lands_on_the_calendar() {
        let store = RecordingStore::succeeding();
        let navigator = RecordingNavigator::default();
        let mut flow = BookingFlow::new("home-modal");
        jane_doe(&mut flow);

        let (attempt, payload) = flow.begin_submit().unwrap();
        let outcome = block_on(persist_with_timeout(&store, &payload, pending()));
        flow.finish(attempt, outcome);

        let calls = store.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].industry, "Healthcare");
        assert_eq!(calls[0].help_with, "AI Integration");
        assert_eq!(calls[0].source_page, "home-modal");

        let redirect = claim_calendar_redirect(&mut flow, attempt, CALENDAR_URL).unwrap();
        // a second claim for the same success must not produce a second tab
        assert_eq!(claim_calendar_redirect(&mut flow, attempt, CALENDAR_URL), None);
        assert!(redirect.open(&navigator));
        assert_eq!(*navigator.opened.borrow(), vec![CALENDAR_URL.to_string()]);
    }

    #[test]
    fn failed_write_never_opens_the_calendar() {
        let store = RecordingStore::failing(PersistError::Rejected {
            status: 500,
            message: "Failed to save booking".into(),
        });
        let navigator = RecordingNavigator::default();
        let mut flow = BookingFlow::new("start-page");
        jane_doe(&mut flow);

        let (attempt, payload) = flow.begin_submit().unwrap();
        let outcome = block_on(persist_with_timeout(&store, &payload, pending()));
        flow.finish(attempt, outcome);

        assert_eq!(claim_calendar_redirect(&mut flow, attempt, CALENDAR_URL), None);
        assert!(navigator.opened.borrow().is_empty());
        assert_eq!(flow.form().full_name, "Jane Doe");
    }

    #[test]
    fn redirect_survives_the_form_going_away() {
        let store = RecordingStore::succeeding();
        let navigator = RecordingNavigator::default();
        let mut flow = BookingFlow::new("home-modal");
        jane_doe(&mut flow);

        let (attempt, payload) = flow.begin_submit().unwrap();
        let outcome = block_on(persist_with_timeout(&store, &payload, pending()));
        flow.finish(attempt, outcome);
        let redirect = claim_calendar_redirect(&mut flow, attempt, CALENDAR_URL).unwrap();
        drop(flow);

        assert_eq!(redirect.url(), CALENDAR_URL);
        assert!(redirect.open(&navigator));
        assert_eq!(navigator.opened.borrow().len(), 1);
    }

    #[test]
    fn blocked_popup_is_reported() {
        let navigator = RecordingNavigator { blocked: true, ..Default::default() };
        let redirect = CalendarRedirect { url: CALENDAR_URL.to_string() };

        assert!(!redirect.open(&navigator));
        assert_eq!(navigator.opened.borrow().len(), 1);
    }

    #[test]
    fn empty_required_field_means_no_write() {
        let store = RecordingStore::succeeding();
        let mut flow = BookingFlow::new("start-page");
        jane_doe(&mut flow);
        flow.form_mut().set(FormField::CurrentChallenges, String::new());

        assert!(flow.begin_submit().is_err());
        assert!(store.calls.borrow().is_empty());
    }
}
