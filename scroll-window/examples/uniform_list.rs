// Example: a million fixed-height rows and the hysteresis band.
use scroll_window::{WindowOptions, WindowState, current_window};

fn main() -> Result<(), scroll_window::Error> {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();
    let mut w = WindowState::new(WindowOptions::uniform(rows.len(), 40.0, 400.0).with_buffer(10))?;
    println!("initial range={:?}", w.range());

    for offset in [360.0, 440.0, 2000.0, 1800.0, 1480.0, 1.0e9] {
        let outcome = w.on_sample(offset);
        println!(
            "sample {offset}: {outcome:?} range={:?} direction={:?}",
            w.range(),
            w.direction()
        );
    }

    let visible = current_window(&rows, w.range());
    println!(
        "rendering {} rows at container offset {} (content {})",
        visible.len(),
        w.style_offset(),
        w.content_extent()
    );
    Ok(())
}
