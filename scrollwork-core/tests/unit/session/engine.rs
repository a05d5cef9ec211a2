use super::*;

fn viewport() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 720.0,
    }
}

#[test]
fn cta_events_fire_only_on_edges() {
    let mut session = ScrollSession::new(Page::default_demo()).unwrap();
    let feed = [0.0, 500.0, 900.0, 900.0, 700.0];
    let events: Vec<ScrollEvent> = feed
        .iter()
        .flat_map(|&s| session.advance(ScrollOffset(s)).events)
        .collect();
    assert_eq!(events, vec![ScrollEvent::CtaShown, ScrollEvent::CtaHidden]);
    assert!(!session.cta_visible());
}

#[test]
fn ticks_report_levels_alongside_edges() {
    let mut session = ScrollSession::new(Page::default_demo()).unwrap();
    let tick = session.advance(ScrollOffset(900.0));
    assert_eq!(tick.view.offset, ScrollOffset(900.0));
    assert!(tick.view.cta_visible);
    assert_eq!(tick.events, vec![ScrollEvent::CtaShown]);
    // Same offset again: level holds, no edge.
    let tick = session.advance(ScrollOffset(900.0));
    assert!(tick.view.cta_visible);
    assert!(tick.events.is_empty());
}

#[test]
fn block_entrances_fire_exactly_once() {
    let mut session = ScrollSession::new(Page::default_demo()).unwrap();
    let on_screen = Rect::new(100.0, 100.0, 600.0, 400.0);
    let off_screen = Rect::new(100.0, 2000.0, 600.0, 2300.0);

    let first = session
        .observe_block("method-card-0", on_screen, viewport())
        .unwrap();
    match first {
        Some(ScrollEvent::BlockEntered { ref id, ref entrance }) => {
            assert_eq!(id, "method-card-0");
            assert_eq!(entrance.delay_s, 0.0);
        }
        other => panic!("expected entrance event, got {other:?}"),
    }

    // Away and back: the trigger is terminal.
    assert!(
        session
            .observe_block("method-card-0", off_screen, viewport())
            .unwrap()
            .is_none()
    );
    assert!(
        session
            .observe_block("method-card-0", on_screen, viewport())
            .unwrap()
            .is_none()
    );
}

#[test]
fn staggered_blocks_carry_their_own_delay() {
    let mut session = ScrollSession::new(Page::default_demo()).unwrap();
    let on_screen = Rect::new(100.0, 100.0, 600.0, 400.0);
    let event = session
        .observe_block("method-card-2", on_screen, viewport())
        .unwrap();
    let Some(ScrollEvent::BlockEntered { entrance, .. }) = event else {
        panic!("expected entrance event");
    };
    assert_eq!(entrance.delay_s, 0.4);
}

#[test]
fn unknown_block_ids_error() {
    let mut session = ScrollSession::new(Page::default_demo()).unwrap();
    let err = session
        .observe_block("ghost", Rect::new(0.0, 0.0, 1.0, 1.0), viewport())
        .unwrap_err();
    assert!(matches!(err, ScrollworkError::Evaluation(_)));
}

#[test]
fn blocks_short_of_the_margin_do_not_fire() {
    let mut session = ScrollSession::new(Page::default_demo()).unwrap();
    // 10px into the viewport from the bottom; the default margin needs 50.
    let barely = Rect::new(100.0, 710.0, 600.0, 1000.0);
    assert!(
        session
            .observe_block("mentor-bio", barely, viewport())
            .unwrap()
            .is_none()
    );
}
