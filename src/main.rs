use wire_task::WireGameApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([480.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Among Us Wire Task",
        options,
        Box::new(|cc| Ok(Box::new(WireGameApp::new(cc)?))),
    )
}

// Versión web: se monta sobre el canvas `the_canvas_id` de index.html
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay documento donde montar la app");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(WireGameApp::new(cc)?))),
            )
            .await;
        if let Err(e) = start_result {
            log::error!("no se pudo arrancar eframe: {e:?}");
        }
    });
}
