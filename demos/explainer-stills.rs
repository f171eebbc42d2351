use slide_gen::timing::frame_count;
use slide_gen::{Deck, Script};

fn main() {
    // forwards the crate's `log` records, including font fallback warnings
    tracing_subscriber::fmt::init();

    let script = match std::env::args().nth(1) {
        Some(path) => Script::load(path).expect("can load script"),
        None => Script::explainer(),
    };

    let deck = Deck::from_script(&script);
    let paths = deck.write_stills("stills").expect("can write stills");

    // no narration yet, so every clip runs for its requested duration
    let timeline = deck.timeline(&[]);
    for (i, path) in paths.iter().enumerate() {
        println!(
            "{} starts at {:>5.1}s for {:.1}s ({} frames)",
            path.display(),
            timeline.starts[i],
            timeline.durations[i],
            frame_count(timeline.durations[i], script.config.fps),
        );
    }
    println!("total: {:.1}s", timeline.total());
}
