use math_hill::MathHillApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Math Hill",
        options,
        Box::new(|_cc| Ok(Box::new(MathHillApp::new()))),
    )
}

// En el navegador el juego corre dentro de un canvas vía eframe::WebRunner.
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("sin window")
            .document()
            .expect("sin document");
        let canvas = document
            .get_element_by_id("math_hill_canvas")
            .expect("falta el elemento #math_hill_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#math_hill_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(MathHillApp::new()))),
            )
            .await
            .expect("no se pudo arrancar eframe");
    });
}
