// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size};
use many_options_button::{
    ButtonImage, ManyOptionsButton, PointerEvent, PointerId, PointerKind,
};
use std::hint::black_box;

fn button() -> ManyOptionsButton {
    let image = || Some(ButtonImage::placeholder(Size::new(48.0, 48.0)));
    ManyOptionsButton::from_images(image(), image(), image(), image(), image())
        .expect("center image is present")
        .with_spacing(12.0)
}

fn mouse(kind: PointerKind) -> PointerEvent {
    PointerEvent::new(PointerId::Mouse, kind)
}

fn gesture_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");

    group.bench_function("hit_test_open_layout", |b| {
        let mut button = button();
        button.set_state(many_options_button::ButtonState::Open);
        let points = [
            Point::new(84.0, 10.0),
            Point::new(10.0, 84.0),
            Point::new(84.0, 84.0),
            Point::new(150.0, 84.0),
            Point::new(84.0, 150.0),
            Point::new(5.0, 5.0),
        ];
        b.iter(|| {
            for point in points {
                black_box(button.hit_test(black_box(point)));
            }
        });
    });

    // Closed center is 48x48; once open, cells are 48 wide with 12 between.
    group.bench_function("swipe_select_cycle", |b| {
        let mut button = button();
        b.iter(|| {
            button.handle_pointer(mouse(PointerKind::Pressed(Point::new(24.0, 24.0))));
            button.handle_pointer(mouse(PointerKind::Moved(Point::new(84.0, 84.0))));
            button.handle_pointer(mouse(PointerKind::Moved(Point::new(140.0, 84.0))));
            black_box(
                button.handle_pointer(mouse(PointerKind::Released(Point::new(140.0, 84.0)))),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, gesture_benchmark);
criterion_main!(benches);
