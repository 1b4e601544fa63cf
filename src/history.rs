use chrono::Local;
use yew::prelude::*;

use crate::calculator::{currency_select, currency_setter};
use crate::currency::{format_signed, Currency, ExchangeRates};
use crate::records::{PeriodTotal, ProfitLedger, ProfitRecord};

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    pub ledger: ProfitLedger,
    pub rates: ExchangeRates,
    pub on_delete: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(History)]
pub fn history(props: &HistoryProps) -> Html {
    let display_currency = use_state(|| Currency::Usd);
    let display = *display_currency;
    let now = Local::now();
    let totals = props.ledger.summary(&now, display, &props.rates);

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="history">
            <div class="card toolbar">
                <span class="muted">{"Show totals in:"}</span>
                { currency_select(display, currency_setter(&display_currency), "Display currency") }
            </div>

            <div class="metric-grid four">
                { for totals.iter().map(|t| period_card(t, display)) }
            </div>

            <div class="card">
                <h2>
                    <span class="tooltip" data-tooltip="Data is kept in this browser. Clearing site data deletes it.">
                        {"Profit History"}
                    </span>
                    { if !props.ledger.is_empty() {
                        html!{ <button onclick={on_clear} class="danger" aria-label="Clear all records">{"Clear all"}</button> }
                    } else { html!{} }}
                </h2>

                { if props.ledger.is_empty() {
                    html!{
                        <div class="empty">
                            <div class="muted">{"No records"}</div>
                            <div class="hint">{"Save profits from the calculator"}</div>
                        </div>
                    }
                } else {
                    html!{
                        <div class="records">
                            { for props.ledger.newest_first().map(|r| record_row(r, &props.on_delete)) }
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

fn period_card(total: &PeriodTotal, currency: Currency) -> Html {
    html! {
        <div class="metric-item">
            <div class="row">
                <div class="metric-label">{ total.period.label() }</div>
                <span class="pill">{ total.count }</span>
            </div>
            <div class={classes!("metric-value", sign_class(total.total))}>
                { format_signed(total.total, currency) }
            </div>
        </div>
    }
}

fn record_row(record: &ProfitRecord, on_delete: &Callback<String>) -> Html {
    let on_remove = {
        let on_delete = on_delete.clone();
        let id = record.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };
    html! {
        <div key={record.id.clone()} class="record">
            <div>
                <strong class={sign_class(record.profit)}>{ format_signed(record.profit, record.currency) }</strong>
                <span class="pill">{ record.currency.code() }</span>
                <span class="pill">{ format!("{:+.2}%", record.profit_percent) }</span>
                <div class="hint">
                    { format!(
                        "{} | O1: {:.2} / O2: {:.2}",
                        record.display_date(&Local),
                        record.quota1,
                        record.quota2,
                    )}
                </div>
            </div>
            <button onclick={on_remove} class="danger" aria-label="Delete record">{"Delete"}</button>
        </div>
    }
}

fn sign_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "success"
    } else {
        "danger"
    }
}
