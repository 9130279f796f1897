// Example: a burst of wheel events coalesced into one sample per frame.
use scroll_window::{ScrollAxis, WindowOptions};
use scroll_window_adapter::{Controller, ManualFrames};

fn main() -> Result<(), scroll_window::Error> {
    let opts = WindowOptions::uniform(5_000, 24.0, 480.0).with_axis(ScrollAxis::Primary);
    let mut c = Controller::new(opts, ManualFrames::new())?;
    let items: Vec<usize> = (0..5_000).collect();

    // Ten wheel events land between two repaints; only the last one is sampled.
    for step in 1..=10 {
        c.on_native_scroll(step as f64 * 300.0, 0.0);
    }
    println!("pending frames={}", c.scheduler().pending());
    println!("frame 1: {:?}", c.tick());

    // A frame with no new events does nothing.
    println!("frame 2: {:?}", c.tick());

    // Scrolling back a little stays inside the buffer.
    c.on_raw_scroll(2_900.0);
    println!("frame 3: {:?}", c.tick());

    let visible = c.current_window(&items);
    println!(
        "render items {}..{} at offset {}",
        visible.first().copied().unwrap_or_default(),
        visible.last().copied().unwrap_or_default(),
        c.style_offset()
    );

    c.on_raw_scroll(0.0);
    c.cancel_pending();
    println!("after teardown: pending={}", c.is_pending());
    Ok(())
}
