use chrono::Utc;
use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::config::{DEFAULT_INVESTMENT_INPUT, SAVED_FLASH_MS};
use crate::currency::{format_amount, format_signed, Currency, ExchangeRates};
use crate::odds::OddsFormat;
use crate::rates::RatesStatus;
use crate::records::ProfitRecord;
use crate::surebet::CalculatorInput;

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub rates: ExchangeRates,
    pub status: RatesStatus,
    pub on_save: Callback<ProfitRecord>,
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let odds_format = use_state(|| OddsFormat::Decimal);
    let quota1 = use_state(String::new);
    let quota2 = use_state(String::new);
    let investment = use_state(|| DEFAULT_INVESTMENT_INPUT.to_string());
    let base_currency = use_state(|| Currency::Usd);
    let currency1 = use_state(|| Currency::Usd);
    let currency2 = use_state(|| Currency::Usd);
    let currency_profit = use_state(|| Currency::Usd);
    let saved = use_state(|| false);

    let result = CalculatorInput {
        quota1: &quota1,
        quota2: &quota2,
        investment: &investment,
        format: *odds_format,
    }
    .calculate();

    // The "saved" state reverts on its own; a pending timeout is dropped on re-run.
    {
        let saved_handle = saved.clone();
        use_effect_with(*saved, move |&flag| {
            let timeout = flag.then(|| Timeout::new(SAVED_FLASH_MS, move || saved_handle.set(false)));
            move || drop(timeout)
        });
    }

    // Handlers
    let on_format_change = {
        let odds_format = odds_format.clone();
        let quota1 = quota1.clone();
        let quota2 = quota2.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let from = *odds_format;
            let to = OddsFormat::from_index(target.selected_index());
            quota1.set(to.convert_input(from, &quota1));
            quota2.set(to.convert_input(from, &quota2));
            odds_format.set(to);
        })
    };

    let on_save_click = {
        let on_save = props.on_save.clone();
        let saved = saved.clone();
        let rates = props.rates;
        let base = *base_currency;
        let profit_currency = *currency_profit;
        Callback::from(move |_: MouseEvent| {
            if let Some(calc) = result.filter(|c| c.is_surebet) {
                on_save.emit(ProfitRecord::from_calculation(&calc, base, profit_currency, &rates, Utc::now()));
                saved.set(true);
            }
        })
    };

    let rates = props.rates;
    let base = *base_currency;

    html! {
        <div class="grid">
            <div class="card">
                <h2>
                    <span>{"Odds & Stake"}</span>
                    { if result.is_some() {
                        html!{ <span class="status-indicator success">{"Valid"}</span> }
                    } else {
                        html!{ <span class="status-indicator warning">{"Enter odds"}</span> }
                    }}
                </h2>

                <div class="input-group">
                    <label class="tooltip" data-tooltip="Notation used for both odds fields">{"Odds Format"}</label>
                    <select onchange={on_format_change} aria-label="Odds format selection">
                        { for OddsFormat::all().iter().map(|(f, name)| {
                            html!{ <option selected={*f == *odds_format}>{ *name }</option> }
                        })}
                    </select>
                </div>

                <div class="row">
                    <div class="input-group">
                        <label>{"Odds 1"}</label>
                        <input
                            id="quota1"
                            placeholder={odds_format.placeholder(2.10)}
                            value={(*quota1).clone()}
                            oninput={text_setter(&quota1)}
                            aria-label="Odds for outcome 1" />
                    </div>
                    <div class="input-group">
                        <label>{"Odds 2"}</label>
                        <input
                            id="quota2"
                            placeholder={odds_format.placeholder(2.05)}
                            value={(*quota2).clone()}
                            oninput={text_setter(&quota2)}
                            aria-label="Odds for outcome 2" />
                    </div>
                </div>

                <div class="input-group">
                    <label>{"Total Investment"}</label>
                    <div class="row">
                        <input
                            id="investment"
                            type="text"
                            placeholder={"e.g. 1000"}
                            value={(*investment).clone()}
                            oninput={text_setter(&investment)}
                            aria-label="Total investment" />
                        { currency_select(base, currency_setter(&base_currency), "Investment currency") }
                    </div>
                </div>

                <div class="section-divider"></div>

                { rates_panel(&rates, props.status) }
            </div>

            { match result {
                Some(calc) => html! {
                    <div class="card">
                        <h2>
                            <span>{ if calc.is_surebet { "Surebet Found" } else { "Not a Surebet" } }</span>
                            <span class={classes!("status-indicator", if calc.is_surebet { "success" } else { "danger" })}>
                                { if calc.is_surebet { "Guaranteed" } else { "Loss" } }
                            </span>
                        </h2>
                        <div class={classes!("result", "large", if calc.is_surebet { "success" } else { "danger" })}>
                            {format!("{:+.2}%", calc.profit_percent)}
                        </div>
                        <div class="hint">
                            {format!(
                                "Implied: {:.1}% + {:.1}% = {:.2}%",
                                100.0 * calc.implied1(),
                                100.0 * calc.implied2(),
                                100.0 * calc.margin,
                            )}
                        </div>

                        <div class="section-divider"></div>

                        <div class="muted">{"Stake Split"}</div>
                        <div class="metric-grid">
                            <div class="metric-item">
                                <div class="row">
                                    <div class="metric-label">{"Stake on Odds 1"}</div>
                                    { currency_select(*currency1, currency_setter(&currency1), "Stake 1 currency") }
                                </div>
                                <div class="metric-value">
                                    { format_amount(rates.convert(calc.stake1, base, *currency1), *currency1) }
                                </div>
                            </div>
                            <div class="metric-item">
                                <div class="row">
                                    <div class="metric-label">{"Stake on Odds 2"}</div>
                                    { currency_select(*currency2, currency_setter(&currency2), "Stake 2 currency") }
                                </div>
                                <div class="metric-value">
                                    { format_amount(rates.convert(calc.stake2, base, *currency2), *currency2) }
                                </div>
                            </div>
                            <div class="metric-item highlight">
                                <div class="row">
                                    <div class="metric-label">{"Profit"}</div>
                                    { currency_select(*currency_profit, currency_setter(&currency_profit), "Profit currency") }
                                </div>
                                <div class={classes!("metric-value", if calc.profit >= 0.0 { "success" } else { "danger" })}>
                                    { format_signed(rates.convert(calc.profit, base, *currency_profit), *currency_profit) }
                                </div>
                            </div>
                            <div class="metric-item">
                                <div class="metric-label">{"Return Either Way"}</div>
                                <div class="metric-value">{ format_amount(calc.total_return, base) }</div>
                            </div>
                        </div>

                        <button
                            onclick={on_save_click}
                            disabled={!calc.is_surebet}
                            class={classes!("save", saved.then_some("saved"))}
                            style="margin-top:12px; width:100%;"
                            aria-label="Save profit">
                            { if *saved { "Saved!" } else { "Save Profit" } }
                        </button>
                    </div>
                },
                None => html! {
                    <div class="card empty">
                        <div class="hint">{"Enter both odds to calculate"}</div>
                    </div>
                },
            }}
        </div>
    }
}

fn rates_panel(rates: &ExchangeRates, status: RatesStatus) -> Html {
    html! {
        <div>
            <div class="muted" style="margin-bottom:8px;">
                {"Exchange Rates "}
                <span class={classes!("status-indicator", status.indicator())}>{ status.label() }</span>
            </div>
            <div class="rates">
                <div>{"1 USD = "}<strong>{format!("{:.0}", rates.usd_cop)}</strong>{" COP"}</div>
                <div>{"1 EUR = "}<strong>{format!("{:.0}", rates.eur_cop)}</strong>{" COP"}</div>
                <div>{"1 USD = "}<strong>{format!("{:.2}", rates.usd_mxn)}</strong>{" MXN"}</div>
                <div>{"1 EUR = "}<strong>{format!("{:.2}", rates.eur_mxn)}</strong>{" MXN"}</div>
                <div>{"1 USD = "}<strong>{format!("{:.3}", rates.usd_eur)}</strong>{" EUR"}</div>
                <div>{"1 EUR = "}<strong>{format!("{:.3}", rates.eur_usd)}</strong>{" USD"}</div>
            </div>
        </div>
    }
}

pub(crate) fn currency_select(selected: Currency, onchange: Callback<Event>, label: &'static str) -> Html {
    html! {
        <select onchange={onchange} aria-label={label}>
            { for Currency::all().iter().map(|&c| {
                html!{ <option selected={c == selected}>{ c.label() }</option> }
            })}
        </select>
    }
}

pub(crate) fn currency_setter(handle: &UseStateHandle<Currency>) -> Callback<Event> {
    let handle = handle.clone();
    Callback::from(move |e: Event| {
        let target: HtmlSelectElement = e.target_unchecked_into();
        handle.set(Currency::from_index(target.selected_index()));
    })
}

fn text_setter(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let target: HtmlInputElement = e.target_unchecked_into();
        handle.set(target.value());
    })
}
