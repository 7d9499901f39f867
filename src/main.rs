use wave_blog::config::CONFIG;
use wave_blog::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🌊 Wave starting (API: {})", CONFIG.api_base_url());

    yew::Renderer::<App>::new().render();
}
