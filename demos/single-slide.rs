use slide_gen::{colours, render_slide, RenderConfig};

fn main() {
    // forwards the crate's `log` records, including font fallback warnings
    tracing_subscriber::fmt::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "CAC Registered.\nSEO Optimized.".to_string());

    let config = RenderConfig::default();
    let spec = config.slide_spec(text, Some(colours::TRUST_GREEN));
    let slide = render_slide(&spec, &config);

    for line in slide.lines() {
        println!(
            "{:?} at ({}, {}) size {}x{}",
            line.metrics.text, line.x, line.y, line.metrics.width, line.metrics.height
        );
    }
    slide.save_png("slide.png").expect("can write slide.png");
}
