use slide_gen::FontFace;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn font_fallback_is_reported_to_the_installed_subscriber() {
    let captured = Captured::default();
    let writer = captured.clone();
    tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .try_init()
        .expect("no other subscriber is installed");

    let face = FontFace::resolve(Some(Path::new("/no/such/font.ttf")), &[]);
    assert!(face.is_builtin());

    let output = String::from_utf8(captured.0.lock().expect("lock").clone()).expect("utf-8 log");
    assert!(output.contains("could not load font /no/such/font.ttf"));
    assert!(output.contains("falling back to the built-in font"));
    assert!(output.contains("WARN"));
}
