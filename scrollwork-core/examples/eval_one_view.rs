use scrollwork::{Page, Rect, ScrollOffset, ScrollSession, Viewport};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let page = Page::default_demo();
    println!("{}", page.to_json_pretty()?);

    let mut session = ScrollSession::new(page)?;
    let viewport = Viewport::new(1280.0, 720.0)?;

    for offset in [0.0, 400.0, 900.0, 1600.0, 700.0] {
        let tick = session.advance(ScrollOffset(offset));
        println!(
            "offset {offset:>6}: cta={} events={:?}",
            tick.view.cta_visible, tick.events
        );
        for layer in &tick.view.layers {
            println!(
                "  {:<14} translate_y={:>8.2} rotate_deg={:>6.2}",
                layer.id, layer.offset.translate_y, layer.offset.rotate_deg
            );
        }
    }

    // A block scrolled into view fires its entrance exactly once.
    let bounds = Rect::new(100.0, 200.0, 700.0, 500.0);
    println!(
        "first observe: {:?}",
        session.observe_block("method-card-0", bounds, viewport)?
    );
    println!(
        "second observe: {:?}",
        session.observe_block("method-card-0", bounds, viewport)?
    );

    Ok(())
}
