use overnight_dashboard::config::CONFIG;
use overnight_dashboard::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Overnight dashboard starting ({})...", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("🔧 API base: {}", CONFIG.api_base_url);
    }

    yew::Renderer::<App>::new().render();
}
