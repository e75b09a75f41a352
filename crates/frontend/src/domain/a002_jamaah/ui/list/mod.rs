//! "Jamaah" tab of the admin console: searchable booking table

use super::details::JamaahDetails;
use super::profile::JamaahProfile;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::icons::icon;
use contracts::domain::a002_jamaah::aggregate::{Jamaah, JamaahId, RegistrationStatus};
use leptos::prelude::*;
use thaw::*;

const DELETE_CONFIRM: &str = "Apakah Anda yakin ingin menghapus data jamaah ini?";

pub fn status_color(status: RegistrationStatus) -> BadgeColor {
    match status {
        RegistrationStatus::Confirmed => BadgeColor::Success,
        RegistrationStatus::Pending => BadgeColor::Warning,
        RegistrationStatus::Canceled => BadgeColor::Danger,
    }
}

#[component]
pub fn JamaahList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let search = RwSignal::new(String::new());
    let viewing: RwSignal<Option<JamaahId>> = RwSignal::new(None);
    let editing: RwSignal<Option<JamaahId>> = RwSignal::new(None);

    let filtered = Memo::new(move |_| {
        let term = search.get();
        ctx.registry.with(|r| r.filter_jamaah(&term))
    });

    let delete = move |id: JamaahId| {
        if browser::confirm(DELETE_CONFIRM) {
            ctx.registry.update(|r| r.delete_jamaah(id));
        }
    };

    let row = move |jamaah: Jamaah| {
        let id = jamaah.id;
        let package_name = {
            let jamaah = jamaah.clone();
            move || ctx.registry.with(|r| r.package_name_for(&jamaah))
        };
        let status = jamaah.registration_status;
        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout>
                        <div class="cell-title">{jamaah.full_name.clone()}</div>
                        <div class="cell-subtitle">
                            {format!("{} • {}", jamaah.registration_number_display(), jamaah.phone)}
                        </div>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>{package_name}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                            {status.as_str()}
                        </Badge>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <div class="row-actions">
                            <button class="button button--icon" title="Lihat" on:click=move |_| viewing.set(Some(id))>
                                {icon("eye")}
                            </button>
                            <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(id))>
                                {icon("edit")}
                            </button>
                            <button class="button button--icon button--danger" title="Hapus" on:click=move |_| delete(id)>
                                {icon("delete")}
                            </button>
                        </div>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="admin-jamaah">
            <div class="toolbar">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Cari Nama atau Nomor Registrasi..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| browser::print_page()>
                    "Export PDF"
                </Button>
            </div>

            <div class="table-card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Jamaah"</TableHeaderCell>
                            <TableHeaderCell>"Paket"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Aksi"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || filtered.get()
                            key=|j| j.clone()
                            children=row
                        />
                    </TableBody>
                </Table>
                <Show when=move || filtered.with(|list| list.is_empty())>
                    <div class="empty-state">"Tidak ada data jamaah."</div>
                </Show>
            </div>

            {move || viewing.get().map(|id| view! {
                <JamaahProfile
                    jamaah_id=id
                    on_edit=Callback::new(move |_| {
                        viewing.set(None);
                        editing.set(Some(id));
                    })
                    on_close=Callback::new(move |_| viewing.set(None))
                />
            })}

            {move || editing.get().map(|id| view! {
                <JamaahDetails
                    jamaah_id=id
                    on_saved=Callback::new(move |_| editing.set(None))
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
