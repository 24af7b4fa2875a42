use super::view_model::DisbursementDetailsViewModel;
use crate::app::use_app_config;
use crate::shared::components::ui::{field_error, Input};
use crate::shared::dialogs::ConfirmationDialog;
use crate::shared::number_format::format_rupiah;
use contracts::domain::a002_umkm::aggregate::MerchantDirectory;
use contracts::domain::a003_finance::aggregate::FinanceRecord;
use contracts::domain::a003_finance::form::fields;
use contracts::shared::data::InMemoryRepository;
use leptos::prelude::*;

const AUTO_FILL: &str = "Auto fill";
const MERCHANT_LIST_ID: &str = "umkm-users";
const CONFIRM_BODY: &str = "Anda akan menambahkan data pencairan dana baru. Pastikan semua informasi sudah benar sebelum melanjutkan. Tekan \"Simpan Data\" untuk mengonfirmasi atau \"Batal\" untuk kembali ke formulir.";

#[component]
pub fn DisbursementDetails(
    directory: MerchantDirectory,
    repo: RwSignal<InMemoryRepository<FinanceRecord>>,
    on_saved: Callback<FinanceRecord>,
) -> impl IntoView {
    let vm = DisbursementDetailsViewModel::new(directory, repo);
    let prefix = StoredValue::new(use_app_config().locale.currency_prefix);

    let bank = Signal::derive(move || {
        vm.account()
            .map(|a| a.bank)
            .unwrap_or_else(|| AUTO_FILL.to_string())
    });
    let account_number = Signal::derive(move || {
        vm.account()
            .map(|a| a.account_number)
            .unwrap_or_else(|| AUTO_FILL.to_string())
    });
    let total_income = Signal::derive(move || {
        vm.account()
            .map(|a| prefix.with_value(|p| format_rupiah(a.total_income, p)))
            .unwrap_or_else(|| AUTO_FILL.to_string())
    });
    let noop = Callback::new(|_: String| {});
    let merchant_error = vm.form.field_error(fields::MERCHANT);

    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command();
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <datalist id=MERCHANT_LIST_ID>
                {vm
                    .merchant_names()
                    .into_iter()
                    .map(|name| view! { <option value=name></option> })
                    .collect_view()}
            </datalist>

            <div class="form__group">
                <label class="form__label" for="user">"User"</label>
                <input
                    id="user"
                    list=MERCHANT_LIST_ID
                    class=move || {
                        if merchant_error.get().is_some() {
                            "form__input form__input--invalid"
                        } else {
                            "form__input"
                        }
                    }
                    placeholder="Masukkan User..."
                    prop:value=vm.form.text(|d| &d.merchant)
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        vm.form.edit(|d| d.merchant = v)
                    }
                />
                {field_error(merchant_error)}
            </div>

            <div class="form__row">
                <Input id="bank" label="Bank" value=bank on_input=noop disabled=true />
                <Input id="rekening" label="Rekening" value=account_number on_input=noop disabled=true />
            </div>
            <Input
                id="totalPendapatan"
                label="Total Pendapatan User"
                value=total_income
                on_input=noop
                disabled=true
            />
            <Input
                id="nominal"
                label="Nominal Pencairan Dana"
                input_type="number"
                placeholder="Masukkan Nominal Pencairan Dana..."
                value=vm.form.text(|d| &d.nominal)
                on_input=Callback::new(move |v: String| vm.form.edit(|d| d.nominal = v))
                error=vm.form.field_error(fields::NOMINAL)
            />
            <Input
                id="buktiTransfer"
                label="Bukti Transfer"
                placeholder="Masukkan Nomor Refrensi Transfer..."
                value=vm.form.text(|d| &d.transfer_reference)
                on_input=Callback::new(move |v: String| vm.form.edit(|d| d.transfer_reference = v))
                error=vm.form.field_error(fields::TRANSFER_REFERENCE)
            />

            <button type="submit" class="button button--primary button--block">
                "Tambahkan Pencairan Dana"
            </button>
        </form>

        <ConfirmationDialog
            is_open=Signal::derive(move || vm.form.is_confirming())
            title="Konfirmasi Pencairan Dana 💰"
            body=CONFIRM_BODY
            on_confirm=Callback::new(move |_| vm.confirm_command(on_saved))
            on_cancel=Callback::new(move |_| vm.form.cancel_confirmation())
        />
    }
}
