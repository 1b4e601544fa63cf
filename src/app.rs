use gloo::console;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::calculator::Calculator;
use crate::config;
use crate::currency::ExchangeRates;
use crate::history::History;
use crate::rates::{fetch_rates, status_for, RatesStatus};
use crate::records::{ProfitLedger, ProfitRecord};
use crate::storage::{BrowserStore, RecordStore};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Calculator,
    History,
}

fn load_ledger() -> ProfitLedger {
    match BrowserStore.load() {
        Ok(loaded) => {
            if loaded.skipped > 0 {
                console::warn!(format!("skipped {} unreadable saved records", loaded.skipped));
            }
            console::log!(format!("loaded {} saved records", loaded.ledger.len()));
            loaded.ledger
        }
        Err(e) => {
            console::error!(format!("error reading saved records: {e}"));
            ProfitLedger::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let tab = use_state(|| Tab::Calculator);
    let ledger = use_state(load_ledger);
    let rates = use_state(ExchangeRates::default);
    let status = use_state(RatesStatus::default);

    // One fetch per page load; defaults stay on failure.
    {
        let rates = rates.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let outcome = fetch_rates(config::rates_url()).await;
                status.set(status_for(&outcome));
                match outcome {
                    Ok(live) => {
                        console::log!("exchange rates updated");
                        rates.set(live);
                    }
                    Err(e) => console::warn!(format!("using built-in exchange rates: {e}")),
                }
            });
            || ()
        });
    }

    // Persist every change.
    use_effect_with((*ledger).clone(), |ledger| {
        if let Err(e) = BrowserStore.save(ledger) {
            console::error!(format!("error saving records: {e}"));
        }
        || ()
    });

    let on_save = {
        let ledger = ledger.clone();
        Callback::from(move |record: ProfitRecord| {
            let mut next = (*ledger).clone();
            next.add(record);
            ledger.set(next);
        })
    };
    let on_delete = {
        let ledger = ledger.clone();
        Callback::from(move |id: String| {
            let mut next = (*ledger).clone();
            next.remove(&id);
            ledger.set(next);
        })
    };
    let on_clear = {
        let ledger = ledger.clone();
        Callback::from(move |()| {
            let mut next = (*ledger).clone();
            next.clear();
            ledger.set(next);
        })
    };

    let select_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let tab_class = |t: Tab| classes!("tab", (*tab == t).then_some("active"));

    html! {
        <div class="container">
            <header>
                <h1>{"Surebet Calculator"}</h1>
                <div class="tooltip pill" data-tooltip="Two-way arbitrage stake splitter with profit history">
                    {"Arbitrage"}
                </div>
            </header>

            <nav class="tabs">
                <button class={tab_class(Tab::Calculator)} onclick={select_tab(Tab::Calculator)}>
                    {"Calculator"}
                </button>
                <button class={tab_class(Tab::History)} onclick={select_tab(Tab::History)}>
                    {"My Profits"}
                    { if !ledger.is_empty() {
                        html!{ <span class="pill">{ ledger.len() }</span> }
                    } else { html!{} }}
                </button>
            </nav>

            { match *tab {
                Tab::Calculator => html! {
                    <Calculator rates={*rates} status={*status} on_save={on_save} />
                },
                Tab::History => html! {
                    <History
                        ledger={(*ledger).clone()}
                        rates={*rates}
                        on_delete={on_delete}
                        on_clear={on_clear} />
                },
            }}

            <footer>
                {"Surebet Calculator v0.1 - stakes, profit and history stay in your browser"}
            </footer>
        </div>
    }
}
