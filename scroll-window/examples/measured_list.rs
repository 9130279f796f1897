// Example: rows whose heights are only known after layout.
use scroll_window::{WindowOptions, WindowState};

fn main() -> Result<(), scroll_window::Error> {
    let opts = WindowOptions::heterogeneous(10_000, 50.0, 300.0)
        .with_buffer(4)
        .with_item_key(|i| format!("msg-{i}"));
    let mut w = WindowState::new(opts)?;

    // The host lays out the rendered rows and reports what it measured.
    for i in w.range().start..w.range().end {
        let height = 30.0 + (i % 5) as f64 * 20.0;
        w.report(w.key_for(i), height)?;
    }
    println!(
        "measured {} rows, content={} rendered={:?}",
        w.ledger().len(),
        w.content_extent(),
        w.rendered_extents()
    );

    w.on_sample(1200.0);
    println!("after scroll: {:?}", w.layout());

    // Rows that scrolled out unmount and drop their measurement.
    let gone = w.key_for(0);
    println!("unreport {gone}: {:?}", w.unreport(&gone));

    // A bad measurement is rejected and the previous one stays.
    let key = w.key_for(w.range().start);
    if let Err(err) = w.report(key, f64::NAN) {
        println!("rejected: {err}");
    }

    // Measurements survive a remount through export/import.
    let saved = w.export_measurements();
    w.reset_measurements();
    let restored = w.import_measurements(saved)?;
    println!("restored {restored} measurements, content={}", w.content_extent());
    Ok(())
}
