mod app;
mod calculator;
mod config;
mod currency;
mod error;
mod history;
mod odds;
mod rates;
mod records;
mod storage;
mod surebet;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
