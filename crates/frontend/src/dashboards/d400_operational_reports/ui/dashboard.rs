use crate::domain::a002_jamaah::ui::list::status_color;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::dashboards::d400_operational_reports::{
    AcceptedPaymentRow, ManifestRow, OperationalReport,
};
use contracts::shared::money::format_rupiah;
use leptos::prelude::*;
use thaw::*;

const TAB_MANIFEST: &str = "peserta";
const TAB_TRANSACTIONS: &str = "transaksi";
const TAB_FINANCE: &str = "keuangan";

fn tab_title(tab: &str) -> &'static str {
    match tab {
        TAB_TRANSACTIONS => "Riwayat Kas Keluar-Masuk",
        TAB_FINANCE => "Proyeksi Laba Rugi",
        _ => "Daftar Manifest Jamaah",
    }
}

/// "Analisa Operasional": figures recomputed from the live registry
#[component]
pub fn OperationalReportsDashboard() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let report = Memo::new(move |_| ctx.registry.with(OperationalReport::build));
    let selected_tab = RwSignal::new(TAB_MANIFEST.to_string());

    let top_package = move || {
        report.with(|r| {
            r.top_package()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "-".to_string())
        })
    };

    view! {
        <div class="page page--reports">
            <PageHeader
                title="Analisa Operasional"
                subtitle="Laporan terpusat untuk monitoring performa bisnis."
            />

            <div class="stat-grid">
                <StatCard
                    label="Omzet Bruto (Verified)"
                    icon_name="wallet"
                    tone=StatTone::Good
                    value=Signal::derive(move || report.with(|r| format_rupiah(r.total_revenue)))
                />
                <StatCard
                    label="Jama'ah Aktif"
                    icon_name="users"
                    value=Signal::derive(move || report.with(|r| r.jamaah_count.to_string()))
                    subtitle=Signal::derive(move || Some("Orang terdaftar".to_string()))
                />
                <StatCard
                    label="Paket Laris"
                    icon_name="plane"
                    value=Signal::derive(top_package)
                />
            </div>

            <div class="reports-grid">
                <section class="panel panel--wide">
                    <h3 class="panel__title">"Distribusi Paket"</h3>
                    <div class="bar-list">
                        {move || {
                            report.with(|r| {
                                r.package_stats
                                    .iter()
                                    .map(|stat| {
                                        let width = format!("width: {:.0}%", r.bar_percent(stat.count));
                                        view! {
                                            <div class="bar-list__item">
                                                <div class="bar-list__label">
                                                    <span>{stat.name.clone()}</span>
                                                    <span class="muted">{format!("{} Jama'ah", stat.count)}</span>
                                                </div>
                                                <div class="bar-list__track">
                                                    <div class="bar-list__fill" style=width></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </section>

                <section class="panel panel--dark">
                    <h3 class="panel__title">"Piutang Dagang"</h3>
                    <p class="muted">"Total Sisa Tagihan"</p>
                    <h2 class="text-warning">{move || report.with(|r| format_rupiah(r.total_receivables))}</h2>
                    <div class="receivable-split">
                        <div>
                            <span class="muted">"Lunas"</span>
                            <strong>{move || report.with(|r| r.lunas_count)}</strong>
                        </div>
                        <div>
                            <span class="muted">"Hutang"</span>
                            <strong>{move || report.with(|r| r.outstanding_count)}</strong>
                        </div>
                    </div>
                </section>
            </div>

            <section class="panel">
                <div class="panel__head">
                    <TabList selected_value=selected_tab>
                        <Tab value=TAB_MANIFEST>"Peserta"</Tab>
                        <Tab value=TAB_TRANSACTIONS>"Transaksi"</Tab>
                        <Tab value=TAB_FINANCE>"Keuangan"</Tab>
                    </TabList>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| browser::print_page()>
                        {icon("printer")}
                        " Unduh Laporan PDF"
                    </Button>
                </div>

                <h3 class="panel__title">{move || selected_tab.with(|t| tab_title(t))}</h3>

                {move || match selected_tab.get().as_str() {
                    TAB_TRANSACTIONS => view! {
                        <TransactionsTable rows=report.with(|r| r.accepted_payment_rows.clone())/>
                    }
                    .into_any(),
                    TAB_FINANCE => view! { <FinanceSummary report=report/> }.into_any(),
                    _ => view! {
                        <ManifestTable rows=report.with(|r| r.manifest_rows.clone())/>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn ManifestTable(rows: Vec<ManifestRow>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Jamaah & ID"</TableHeaderCell>
                    <TableHeaderCell>"Paket Perjalanan"</TableHeaderCell>
                    <TableHeaderCell>"Kelengkapan"</TableHeaderCell>
                    <TableHeaderCell>"Status Reg"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let departure = if row.departure_date.is_empty() {
                            String::new()
                        } else {
                            date_utils::format_date(&row.departure_date)
                        };
                        let passport_class = if row.has_passport { "text-success" } else { "text-error" };
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <div>
                                            <p class="strong">{row.full_name}</p>
                                            <p class="muted mono">{row.registration_number}</p>
                                        </div>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <div>
                                            <p>{row.package_name}</p>
                                            <p class="muted">{departure}</p>
                                        </div>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <span class=passport_class>
                                            {icon(if row.has_passport { "check-circle" } else { "x-circle" })}
                                            " Paspor"
                                        </span>
                                        <span class="muted">{format!(" · {} Dokumen", row.document_count)}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Badge
                                            appearance=BadgeAppearance::Tint
                                            color=status_color(row.registration_status)
                                        >
                                            {row.registration_status.as_str()}
                                        </Badge>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn TransactionsTable(rows: Vec<AcceptedPaymentRow>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Pendaftar"</TableHeaderCell>
                    <TableHeaderCell>"Nominal Jurnal"</TableHeaderCell>
                    <TableHeaderCell>"Tanggal Posting"</TableHeaderCell>
                    <TableHeaderCell>"Status Verifikasi"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{row.jamaah_name}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <span class="text-success">{format!("+ {}", format_rupiah(row.amount))}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{date_utils::format_naive_date(row.date)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                        "TERVALIDASI"
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn FinanceSummary(report: Memo<OperationalReport>) -> impl IntoView {
    view! {
        <div class="finance-summary">
            <div class="finance-summary__intro">
                {icon("file-text")}
                <h4>"Laporan Keuangan Strategis"</h4>
                <p class="muted">
                    "Proyeksi pendapatan dihitung dari seluruh tagihan jama'ah aktif terhadap pembayaran yang sudah diverifikasi."
                </p>
            </div>
            <div class="finance-summary__figures">
                <div class="finance-summary__figure">
                    <span class="muted">"Piutang Belum Terbayar"</span>
                    <strong class="text-warning">{move || report.with(|r| format_rupiah(r.total_receivables))}</strong>
                </div>
                <div class="finance-summary__figure">
                    <span class="muted">"Kas Bersih Verified"</span>
                    <strong class="text-success">{move || report.with(|r| format_rupiah(r.total_revenue))}</strong>
                </div>
                <div class="finance-summary__figure">
                    <span class="muted">"Proyeksi Total Pendapatan"</span>
                    <strong>{move || report.with(|r| format_rupiah(r.projected_income()))}</strong>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tab_falls_back_to_manifest() {
        assert_eq!(tab_title(TAB_MANIFEST), "Daftar Manifest Jamaah");
        assert_eq!(tab_title(TAB_TRANSACTIONS), "Riwayat Kas Keluar-Masuk");
        assert_eq!(tab_title(TAB_FINANCE), "Proyeksi Laba Rugi");
        assert_eq!(tab_title("other"), "Daftar Manifest Jamaah");
    }
}
