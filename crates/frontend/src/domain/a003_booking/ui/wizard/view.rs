use super::steps::{ContactInfoStep, EventDetailsStep, PackageSelectionStep, ReviewStep};
use super::view_model::BookingWizardViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::notification::use_notifications;
use contracts::domain::a003_booking::WizardStep;
use contracts::shared::site_info::SITE;
use leptos::prelude::*;

#[component]
fn ProgressIndicator(step: Memo<WizardStep>) -> impl IntoView {
    view! {
        <div class="wizard__progress">
            {WizardStep::all()
                .into_iter()
                .map(|s| {
                    let state_class = move || {
                        let current = step.get();
                        if s == current {
                            "wizard__dot wizard__dot--current"
                        } else if s < current {
                            "wizard__dot wizard__dot--done"
                        } else {
                            "wizard__dot"
                        }
                    };
                    let marker = move || {
                        if s < step.get() {
                            "✓".to_string()
                        } else {
                            s.index().to_string()
                        }
                    };
                    view! {
                        <div class="wizard__progress-item">
                            <span class=state_class>{marker}</span>
                            {(!s.is_last()).then(|| view! {
                                <span class=move || {
                                    if s < step.get() {
                                        "wizard__bar wizard__bar--done"
                                    } else {
                                        "wizard__bar"
                                    }
                                }></span>
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn BookingWizardPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let notifications = use_notifications();

    let vm = BookingWizardViewModel::new(ctx.take_preselected_package());
    // Шаг отдельно от черновика: ввод в поле не перерисовывает форму
    let step = Memo::new(move |_| vm.step());

    let go_previous = Callback::new(move |_| vm.previous());
    let go_next = Callback::new(move |_| vm.next());
    let submit = Callback::new(move |_| vm.submit_command(notifications));

    view! {
        <div class="page page--gradient">
            <PageHeader
                centered=true
                title="Book Your Photography Session"
                subtitle="Let's capture your special moments together"
            />

            <div class="wizard">
                <ProgressIndicator step=step />

                <div class="wizard__card">
                    <div class="wizard__card-header">
                        <h2 class="wizard__title">{move || step.get().heading()}</h2>
                        <p class="wizard__description">{move || step.get().description()}</p>
                    </div>

                    <div class="wizard__body">
                        {move || match step.get() {
                            WizardStep::EventDetails => view! { <EventDetailsStep vm=vm /> }.into_any(),
                            WizardStep::PackageSelection => view! { <PackageSelectionStep vm=vm /> }.into_any(),
                            WizardStep::ContactInfo => view! { <ContactInfoStep vm=vm /> }.into_any(),
                            WizardStep::Review => view! { <ReviewStep vm=vm /> }.into_any(),
                        }}
                    </div>

                    <div class="wizard__nav">
                        <Button
                            variant="outline"
                            on_click=go_previous
                            disabled=Signal::derive(move || step.get() == WizardStep::FIRST)
                        >
                            "Previous"
                        </Button>
                        <Show
                            when=move || step.get().is_last()
                            fallback=move || view! {
                                <Button
                                    on_click=go_next
                                    disabled=Signal::derive(move || !vm.can_go_next())
                                >
                                    "Next"
                                </Button>
                            }
                        >
                            <Button on_click=submit>"Submit Booking Request"</Button>
                        </Show>
                    </div>
                </div>

                <p class="wizard__help">
                    {format!(
                        "Need help? Call us at {} or email {}",
                        SITE.booking_phone, SITE.booking_email
                    )}
                </p>
            </div>
        </div>
    }
}
