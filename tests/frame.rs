use gpui_planeplot::{
    Color, Extents, FrameClock, PathOp, PlanePlot, PlotFunction, PointerEvent, RenderCommand,
    RenderList, Vector2,
};

fn square_plane() -> PlanePlot {
    let mut plane = PlanePlot::builder()
        .extents(Extents::new(
            Vector2::new(-10.0, -10.0),
            Vector2::new(20.0, 20.0),
        ))
        .plot(PlotFunction::new("square", Color::BLUE, |x| x * x))
        .build(Some(Vector2::new(800.0, 600.0)))
        .expect("valid plot");
    plane.play();
    plane
}

fn plot_path(list: &RenderList, color: Color) -> Vec<PathOp> {
    list.paths()
        .find(|(_, style)| style.color == color)
        .map(|(ops, _)| ops.to_vec())
        .expect("plot path recorded")
}

#[test]
fn first_plot_point_matches_composed_mapping() {
    let mut plane = square_plane();
    let mut clock = FrameClock::new();
    let mut list = RenderList::new();
    plane.execute(clock.tick(), Vector2::new(800.0, 600.0), &mut list);

    let scene = plane.scene();
    let expected = scene
        .viewport
        .map_to_global(scene.extents.map_to_local(Vector2::new(-10.0, 100.0)));
    let ops = plot_path(&list, Color::BLUE);
    assert_eq!(ops[0], PathOp::MoveTo(expected));
    match ops[400] {
        PathOp::LineTo(pt) => {
            assert!((pt.x - 400.0).abs() < 1e-9);
            assert!((pt.y - 300.0).abs() < 1e-9);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn drag_pans_before_drawing() {
    let mut plane = square_plane();
    plane.push_pointer(PointerEvent::Press);
    plane.push_pointer(PointerEvent::Move {
        delta: Vector2::new(100.0, 0.0),
    });

    let mut list = RenderList::new();
    let mut clock = FrameClock::new();
    plane.execute(clock.tick(), Vector2::new(800.0, 600.0), &mut list);

    let extents = plane.scene().extents;
    assert!((extents.pos.x - (-12.5)).abs() < 1e-12);

    // The axes moved right by the dragged 100 pixels.
    let axes = list
        .paths()
        .find(|(_, style)| style.width == 3.0)
        .map(|(ops, _)| ops.to_vec())
        .expect("axes path");
    match axes[2] {
        PathOp::MoveTo(pt) => {
            assert!((pt.x - 500.0).abs() < 1e-9);
            assert_eq!(pt.y, 0.0);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn resize_takes_effect_on_next_frame() {
    let mut plane = square_plane();
    let mut clock = FrameClock::new();
    let mut list = RenderList::new();
    plane.execute(clock.tick(), Vector2::new(400.0, 300.0), &mut list);

    assert_eq!(plane.scene().viewport.size, Vector2::new(400.0, 300.0));
    assert_eq!(plot_path(&list, Color::BLUE).len(), 400);
    assert_eq!(
        list.commands()[0],
        RenderCommand::Clear(gpui_planeplot::ScreenRect::new(
            Vector2::zero(),
            Vector2::new(400.0, 300.0)
        ))
    );
}

#[test]
fn restart_clears_stale_drag() {
    let mut plane = square_plane();
    plane.stop();
    plane.push_pointer(PointerEvent::Press);
    plane.play();
    plane.push_pointer(PointerEvent::Move {
        delta: Vector2::new(50.0, 50.0),
    });

    let mut list = RenderList::new();
    plane.execute(Default::default(), Vector2::new(800.0, 600.0), &mut list);
    assert_eq!(plane.scene().extents.pos, Vector2::new(-10.0, -10.0));
}

#[test]
fn replay_mid_drag_drops_queued_moves() {
    let mut plane = square_plane();
    let mut list = RenderList::new();
    plane.push_pointer(PointerEvent::Press);
    plane.execute(Default::default(), Vector2::new(800.0, 600.0), &mut list);
    plane.push_pointer(PointerEvent::Move {
        delta: Vector2::new(100.0, 0.0),
    });
    plane.play();
    plane.execute(Default::default(), Vector2::new(800.0, 600.0), &mut list);
    assert_eq!(plane.scene().extents.pos, Vector2::new(-10.0, -10.0));

    // Later frames pan once, not twice.
    plane.push_pointer(PointerEvent::Move {
        delta: Vector2::new(100.0, 0.0),
    });
    plane.execute(Default::default(), Vector2::new(800.0, 600.0), &mut list);
    plane.execute(Default::default(), Vector2::new(800.0, 600.0), &mut list);
    assert!((plane.scene().extents.pos.x - (-12.5)).abs() < 1e-12);
}

#[test]
fn far_from_origin_frame_completes() {
    let mut plane = PlanePlot::builder()
        .extents(Extents::new(Vector2::new(1e16, 0.0), Vector2::new(20.0, 20.0)))
        .build(Some(Vector2::new(800.0, 600.0)))
        .expect("valid plot");
    plane.play();
    let mut list = RenderList::new();
    plane.execute(Default::default(), Vector2::new(800.0, 600.0), &mut list);
    assert!(!list.commands().is_empty());
}
