// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for pointer-driven state updates.
//!
//! Measures the performance of:
//! - Panel drag (one pointer move per frame)
//! - Edge-anchored panel resize
//! - Image pan while magnified
//! - Preview navigation with cache swap

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::{mouse, Point, Size};
use panel_lens::application::port::FetchedAttachment;
use panel_lens::config::LayoutStore;
use panel_lens::domain::attachment::Attachment;
use panel_lens::domain::panel::ModalType;
use panel_lens::infrastructure::MemoryObjectUris;
use panel_lens::ui::preview::{AttachmentPreviewController, Effect, FetchCompleted, Message};
use panel_lens::ui::state::{GeometryEngine, ImageViewState, ResizeDirection};
use std::hint::black_box;
use std::sync::Arc;

const VIEWPORT: Size = Size {
    width: 1920.0,
    height: 1080.0,
};

/// Pointer path sweeping well past every viewport edge.
fn pointer_path() -> Vec<Point> {
    (0..240)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / 240.0 * std::f32::consts::TAU;
            Point::new(960.0 + 1500.0 * t.cos(), 540.0 + 900.0 * t.sin())
        })
        .collect()
}

fn bench_panel_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_gestures");
    let path = pointer_path();

    group.bench_function("drag_240_moves", |b| {
        b.iter(|| {
            let mut engine = GeometryEngine::new(ModalType::Verification);
            engine.start_drag(Point::new(960.0, 540.0), mouse::Button::Left, &VIEWPORT);
            for &pointer in &path {
                engine.on_pointer_move(black_box(pointer), &VIEWPORT);
            }
            engine.on_pointer_up();
            black_box(engine.effective_rect(&VIEWPORT));
        });
    });

    group.bench_function("resize_nw_240_moves", |b| {
        b.iter(|| {
            let mut engine = GeometryEngine::new(ModalType::Verification);
            engine.start_resize(Point::new(750.0, 230.0), ResizeDirection::NorthWest, &VIEWPORT);
            for &pointer in &path {
                engine.on_pointer_move(black_box(pointer), &VIEWPORT);
            }
            engine.on_pointer_up();
            black_box(engine.effective_rect(&VIEWPORT));
        });
    });

    group.finish();
}

fn bench_image_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_gestures");
    let path = pointer_path();

    group.bench_function("pan_240_moves", |b| {
        b.iter(|| {
            let mut image = ImageViewState::default();
            image.toggle_fit_or_actual();
            image.start_pan(Point::ORIGIN);
            for &pointer in &path {
                image.update_pan(black_box(pointer));
            }
            black_box(image.pan());
        });
    });

    group.finish();
}

/// Measures navigate + install, including the URI revoke/create swap.
fn bench_preview_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_gestures");
    let attachments: Vec<Attachment> = (0..32)
        .map(|i| Attachment::new(format!("att-{i}").as_str(), format!("scan-{i}.png")))
        .collect();
    let bytes: Arc<[u8]> = vec![0_u8; 4096].into();

    group.bench_function("navigate_32_attachments", |b| {
        b.iter(|| {
            let uris = Arc::new(MemoryObjectUris::new());
            let mut controller = AttachmentPreviewController::new(
                ModalType::AttachmentInbox,
                LayoutStore::in_memory(),
                uris,
            );
            controller.handle(Message::AttachmentsChanged(attachments.clone()), &VIEWPORT);
            let mut effect = controller.handle(Message::Open(0), &VIEWPORT);
            for index in 1..=attachments.len() {
                if let Effect::Fetch(ticket) = effect {
                    let result = Ok(FetchedAttachment::new(bytes.clone(), "image/png"));
                    controller.handle(
                        Message::FetchCompleted(FetchCompleted { ticket, result }),
                        &VIEWPORT,
                    );
                }
                effect = controller.handle(Message::Navigate(index), &VIEWPORT);
            }
            black_box(controller.resource().cloned());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_panel_drag,
    bench_image_pan,
    bench_preview_navigation
);
criterion_main!(benches);
