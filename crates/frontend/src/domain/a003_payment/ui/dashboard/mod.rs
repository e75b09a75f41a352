//! Cashier desk: billing per jamaah, verification queue and the journal

use super::details::PaymentDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PageHeader;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::domain::a002_jamaah::aggregate::JamaahId;
use contracts::domain::common::AggregateId;
use contracts::domain::a003_payment::aggregate::{
    Payment, PaymentDecision, PaymentId, VerificationStatus,
};
use contracts::shared::billing::BillingSummary;
use contracts::shared::money::format_rupiah;
use leptos::prelude::*;
use thaw::*;

fn verification_color(status: VerificationStatus) -> BadgeColor {
    match status {
        VerificationStatus::Accepted => BadgeColor::Success,
        VerificationStatus::Rejected => BadgeColor::Danger,
        VerificationStatus::Pending => BadgeColor::Warning,
    }
}

#[component]
pub fn PaymentDashboard() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // "" means nothing selected
    let selected = RwSignal::new(String::new());
    let show_form = RwSignal::new(false);

    let selected_id = Memo::new(move |_| JamaahId::from_string(&selected.get()).ok());

    let jamaah_name = move |id: JamaahId| {
        ctx.registry
            .with(|r| r.jamaah(id).map(|j| j.full_name.clone()))
            .unwrap_or_else(|| "-".to_string())
    };

    let decide = move |payment_id: PaymentId, decision: PaymentDecision| {
        leptos::logging::log!("🔷 verify payment {:?}: {:?}", payment_id, decision);
        ctx.registry.update(|r| {
            if let Some(mut payment) = r.payment(payment_id).cloned() {
                payment.verify(decision);
                r.update_payment(payment);
            }
        });
    };

    let pending = Memo::new(move |_| ctx.registry.with(|r| r.pending_payments()));
    let history = Memo::new(move |_| ctx.registry.with(|r| r.settled_payments()));

    let billing_panel = move || {
        let Some(id) = selected_id.get() else {
            return view! {
                <div class="empty-state">
                    {icon("wallet")}
                    <p>"Silahkan pilih data jamaah untuk mengelola tagihan."</p>
                </div>
            }
            .into_any();
        };

        let data = ctx.registry.with(|r| {
            r.jamaah(id).map(|j| {
                (
                    j.clone(),
                    r.package_name_for(j),
                    BillingSummary::for_jamaah(r, j),
                )
            })
        });
        let Some((jamaah, package_name, summary)) = data else {
            return view! { <div class="empty-state"><p>"Jamaah tidak ditemukan."</p></div> }
                .into_any();
        };

        view! {
            <div class="billing-summary">
                <div class="billing-summary__total">
                    <p class="muted">"Estimasi Tagihan Total"</p>
                    <h3>{format_rupiah(summary.total_bill)}</h3>
                    <p class="muted">{format!("{} x {} Orang", package_name, jamaah.number_of_persons)}</p>
                </div>
                <div class="billing-summary__row">
                    <div>
                        <p class="muted">"Masuk"</p>
                        <p class="text-success">{format_rupiah(summary.total_paid)}</p>
                    </div>
                    <div>
                        <p class="muted">"Status"</p>
                        <p>{jamaah.payment_status.as_str()}</p>
                    </div>
                </div>
                <div class="billing-summary__remaining">
                    <span>"Sisa Piutang:"</span>
                    <strong class="text-error">{format_rupiah(summary.remaining)}</strong>
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.set(true)>
                    {icon("plus")}
                    " Catat Bayar"
                </Button>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page page--payments">
            <PageHeader
                title="Kasir & Pembayaran"
                subtitle="Verifikasi dokumen keuangan dan monitor cicilan jama'ah."
            />

            <div class="payments-grid">
                <section class="panel">
                    <h3 class="panel__title">"Informasi Tagihan"</h3>
                    <div class="form-group">
                        <label>"Pilih Data Jamaah"</label>
                        <select on:change=move |ev| selected.set(event_target_value(&ev))>
                            <option value="" selected=move || selected.with(|s| s.is_empty())>
                                "-- Cari Jamaah --"
                            </option>
                            {move || {
                                ctx.registry.with(|r| {
                                    r.jamaah
                                        .iter()
                                        .map(|j| {
                                            let value = j.to_string_id();
                                            let is_selected = {
                                                let value = value.clone();
                                                move || selected.with(|s| *s == value)
                                            };
                                            view! {
                                                <option value=value selected=is_selected>
                                                    {format!("{} ({})", j.full_name, j.registration_number_display())}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </select>
                    </div>
                    {billing_panel}
                </section>

                <section class="panel panel--wide">
                    <div class="panel__head">
                        <h3 class="panel__title">"Konfirmasi Transfer Jamaah"</h3>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            {move || format!("{} Menunggu", pending.with(|p| p.len()))}
                        </Badge>
                    </div>
                    <Show
                        when=move || pending.with(|p| !p.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">
                                {icon("check-circle")}
                                <p>"Tidak ada antrian verifikasi pembayaran."</p>
                            </div>
                        }
                    >
                        <ul class="verification-list">
                            <For
                                each=move || pending.get()
                                key=|p: &Payment| p.clone()
                                children=move |payment: Payment| {
                                    let payment_id = payment.id;
                                    view! {
                                        <li class="verification-item">
                                            <div class="verification-item__info">
                                                <p class="strong">{jamaah_name(payment.jamaah_id)}</p>
                                                <p class="muted">
                                                    {format!(
                                                        "{} • {}",
                                                        date_utils::format_naive_date(payment.date),
                                                        payment.method.as_str(),
                                                    )}
                                                </p>
                                                {payment.notes.clone().map(|n| view! { <p class="muted italic">{n}</p> })}
                                            </div>
                                            <div class="verification-item__amount">
                                                {format_rupiah(payment.amount)}
                                            </div>
                                            <div class="verification-item__actions">
                                                <button
                                                    class="btn btn-light text-error"
                                                    on:click=move |_| decide(payment_id, PaymentDecision::Reject)
                                                >
                                                    {icon("x-circle")}
                                                    " Tolak"
                                                </button>
                                                <button
                                                    class="btn btn-success"
                                                    on:click=move |_| decide(payment_id, PaymentDecision::Accept)
                                                >
                                                    {icon("check-circle")}
                                                    " Verifikasi"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </section>
            </div>

            <section class="panel">
                <div class="panel__head">
                    <h3 class="panel__title">"Jurnal Keuangan"</h3>
                    <span class="muted">"Semua Transaksi"</span>
                </div>
                <Show
                    when=move || history.with(|h| !h.is_empty())
                    fallback=|| view! { <div class="empty-state"><p>"Belum ada riwayat transaksi."</p></div> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Jamaah"</TableHeaderCell>
                                <TableHeaderCell>"Nominal"</TableHeaderCell>
                                <TableHeaderCell>"Metode"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || history.get()
                                key=|p: &Payment| p.clone()
                                children=move |payment: Payment| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{jamaah_name(payment.jamaah_id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_rupiah(payment.amount)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{payment.method.as_str()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge
                                                        appearance=BadgeAppearance::Tint
                                                        color=verification_color(payment.status)
                                                    >
                                                        {payment.status.as_str()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </section>

            {move || {
                selected_id
                    .get()
                    .filter(|_| show_form.get())
                    .map(|id| {
                        view! {
                            <PaymentDetails
                                jamaah_id=id
                                on_saved=Callback::new(move |_| show_form.set(false))
                                on_close=Callback::new(move |_| show_form.set(false))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_follow_verification() {
        assert!(matches!(verification_color(VerificationStatus::Accepted), BadgeColor::Success));
        assert!(matches!(verification_color(VerificationStatus::Rejected), BadgeColor::Danger));
        assert!(matches!(verification_color(VerificationStatus::Pending), BadgeColor::Warning));
    }
}
