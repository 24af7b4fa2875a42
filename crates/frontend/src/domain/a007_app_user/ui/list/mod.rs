use crate::app::use_data_source;
use crate::domain::a007_app_user::ui::details::AppUserDetails;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::dialogs::{ConfirmVariant, ConfirmationDialog};
use crate::shared::fault_boundary::FaultBoundary;
use crate::shared::form_flow::DetailsTarget;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a007_app_user::aggregate::AppUser;
use contracts::shared::data::{InMemoryRepository, Repository};
use contracts::shared::search::filter_list;
use contracts::shared::toast::Severity;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AppUserList() -> impl IntoView {
    let repo = RwSignal::new(InMemoryRepository::new(use_data_source().app_users()));
    let filter = RwSignal::new(String::new());
    let details = RwSignal::new(None::<DetailsTarget>);
    let pending_delete = RwSignal::new(None::<AppUser>);
    let toast = use_toast();

    let rows = move || repo.with(|repo| filter_list(repo.records(), &filter.get()));

    let on_saved = Callback::new(move |user: AppUser| {
        let was_edit = details.get_untracked().is_some_and(|t| t.is_edit());
        details.set(None);
        leptos::logging::log!("app user saved: {}", user.id);
        if was_edit {
            toast.success("Pengguna berhasil diperbarui!");
        } else {
            toast.success("Pengguna baru berhasil ditambahkan!");
        }
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(user) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        match repo.try_update(|repo| repo.delete(&user.id)) {
            Some(Ok(_)) => {
                toast.add("Pengguna berhasil dihapus!", Severity::Error);
            }
            Some(Err(e)) => toast.error(e.to_string()),
            None => {}
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Daftar Pengguna" subtitle="Dashboard / Kelola Pengguna">
                {()}
            </PageHeader>

            <div class="card">
                <div class="card__header">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v: String| filter.set(v))
                        placeholder="Cari pengguna berdasarkan nama atau email"
                    />
                    <button class="button button--primary" on:click=move |_| details.set(Some(DetailsTarget::New))>
                        "Tambah Pengguna"
                    </button>
                </div>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"ID Pengguna"</th>
                                <th>"Nama Pengguna"</th>
                                <th>"Email"</th>
                                <th class="table__cell--center">"Total Pesanan"</th>
                                <th>"Tanggal Bergabung"</th>
                                <th>"Aksi"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = filter.get();
                                rows()
                                    .into_iter()
                                    .map(|user| {
                                        let edit_id = user.id.clone();
                                        let to_delete = user.clone();
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">{user.id.clone()}</td>
                                                <td>
                                                    <div class="table__product">
                                                        <img class="table__avatar" src=user.avatar.clone() alt=user.name.clone() />
                                                        <span>{highlight_matches(&user.name, &query)}</span>
                                                    </div>
                                                </td>
                                                <td>{highlight_matches(&user.email, &query)}</td>
                                                <td class="table__cell--center">{user.total_orders}</td>
                                                <td>{user.join_date.clone()}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| details.set(Some(DetailsTarget::Edit(edit_id.clone())))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger-ghost"
                                                        title="Hapus"
                                                        on:click=move |_| pending_delete.set(Some(to_delete.clone()))
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls compact=true />
            </div>

            <Modal
                is_open=Signal::derive(move || details.get().is_some())
                on_close=Callback::new(move |_| details.set(None))
                title=Signal::derive(move || {
                    let title = if details.get().is_some_and(|t| t.is_edit()) {
                        "Edit Pengguna"
                    } else {
                        "Tambah Pengguna Baru"
                    };
                    title.to_string()
                })
            >
                {move || details.get().map(|target| view! {
                    <FaultBoundary context="Pengguna">
                        <AppUserDetails id=target.id() repo=repo on_saved=on_saved />
                    </FaultBoundary>
                })}
            </Modal>

            <ConfirmationDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Apakah Anda yakin ingin menghapus pengguna ini?"
                body=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|u| format!("{} ({}) akan dihapus dari daftar pengguna.", u.name, u.email))
                        .unwrap_or_default()
                })
                variant=ConfirmVariant::Delete
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            />
        </div>
    }
}
