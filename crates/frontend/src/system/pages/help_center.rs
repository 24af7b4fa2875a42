//! "Bantuan" page: searchable FAQ accordion and the support contact form
use crate::app::use_data_source;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::toast::use_toast;
use contracts::shared::search::filter_list;
use contracts::shared::validation::FieldErrors;
use contracts::system::support::{fields, FaqEntry, SupportMessageDraft};
use leptos::prelude::*;

#[component]
pub fn HelpCenter() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Pusat Bantuan" subtitle="Dashboard / Bantuan">
                {()}
            </PageHeader>
            <div class="help-center">
                <FaqSection />
                <SupportForm />
            </div>
        </div>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let faqs = StoredValue::new(use_data_source().faqs());
    let filter = RwSignal::new(String::new());

    view! {
        <div class="card help-center__faq">
            <h3 class="card__title">"Pertanyaan yang Sering Diajukan (FAQ)"</h3>
            <SearchInput
                value=filter
                on_change=Callback::new(move |v: String| filter.set(v))
                placeholder="Cari pertanyaan..."
            />
            <div class="faq">
                {move || {
                    let query = filter.get();
                    let found = faqs.with_value(|faqs| filter_list(faqs, &query));
                    if found.is_empty() {
                        return view! {
                            <div class="faq__empty">"Tidak ada pertanyaan yang cocok."</div>
                        }
                        .into_any();
                    }
                    found
                        .into_iter()
                        .map(|faq| view! { <FaqItem faq=faq query=query.clone() /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// One collapsible question; starts closed
#[component]
fn FaqItem(faq: FaqEntry, query: String) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="faq__item">
            <button
                class="faq__question"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <h4>{highlight_matches(&faq.question, &query)}</h4>
                <span class="faq__chevron" class:faq__chevron--open=move || open.get()>
                    {icon("chevron-down")}
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="faq__answer">
                    <p>{faq.answer.clone()}</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SupportForm() -> impl IntoView {
    let draft = RwSignal::new(SupportMessageDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let toast = use_toast();

    let text = move |get: fn(&SupportMessageDraft) -> &String| {
        Signal::derive(move || draft.with(|d| get(d).clone()))
    };
    let error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(SupportMessageDraft::validate) {
            Ok(message) => {
                log::info!(
                    "support: message from {} <{}>, subject {:?}",
                    message.name,
                    message.email,
                    message.subject
                );
                draft.set(SupportMessageDraft::default());
                errors.set(FieldErrors::new());
                toast.success("Pesan berhasil dikirim! Tim kami akan segera menghubungi Anda.");
            }
            Err(found) => {
                log::debug!("support: {} field error(s)", found.len());
                errors.set(found);
            }
        }
    };

    view! {
        <div class="card help-center__contact">
            <h3 class="card__title">"Hubungi Dukungan"</h3>
            <p class="card__text">
                "Tidak dapat menemukan jawaban yang Anda cari? Tim kami siap membantu."
            </p>
            <form class="details-form" on:submit=on_submit>
                <Input
                    id="name"
                    label="Nama"
                    placeholder="Nama Anda"
                    value=text(|d| &d.name)
                    on_input=Callback::new(move |v: String| draft.update(|d| d.name = v))
                    error=error(fields::NAME)
                />
                <Input
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="anda@email.com"
                    value=text(|d| &d.email)
                    on_input=Callback::new(move |v: String| draft.update(|d| d.email = v))
                    error=error(fields::EMAIL)
                />
                <Input
                    id="subject"
                    label="Subjek"
                    placeholder="Tentang apa ini?"
                    value=text(|d| &d.subject)
                    on_input=Callback::new(move |v: String| draft.update(|d| d.subject = v))
                />
                <Textarea
                    id="message"
                    label="Pesan"
                    placeholder="Tulis pesan Anda di sini..."
                    rows=4
                    value=text(|d| &d.message)
                    on_input=Callback::new(move |v: String| draft.update(|d| d.message = v))
                    error=error(fields::MESSAGE)
                />
                <button type="submit" class="button button--primary button--block">
                    "Kirim Pesan"
                </button>
            </form>
        </div>
    }
}
