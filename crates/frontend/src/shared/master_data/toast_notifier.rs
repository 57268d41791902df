use contracts::shared::master_data::{Notification, Notifier, Severity};
use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

/// Shows notifications as thaw toasts; needs a `ToasterProvider` above it
#[derive(Clone)]
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    pub fn from_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }
}

fn intent(severity: Severity) -> ToastIntent {
    match severity {
        Severity::Success => ToastIntent::Success,
        Severity::Info => ToastIntent::Info,
        Severity::Warning => ToastIntent::Warning,
        Severity::Error => ToastIntent::Error,
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            description,
            severity,
        } = notification;

        match severity {
            Severity::Error => log::error!("{}: {}", title, description.as_deref().unwrap_or("")),
            _ => log::info!("{}", title),
        }

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        {description.map(|d| view! { <ToastBody>{d}</ToastBody> })}
                    </Toast>
                }
            },
            ToastOptions::default().with_intent(intent(severity)),
        );
    }
}
