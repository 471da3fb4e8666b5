//! Performance benchmarks for frame rendering
//!
//! Measures a full `ui::render` pass for growing scrollbacks, at the tail and
//! scrolled to the top.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};
use sniff::app::{Direction, Event, ScrollOp, Session};
use sniff::models::{InterfaceDescriptor, PacketRecord};
use sniff::ui;

const WIDTH: u16 = 160;
const HEIGHT: u16 = 48;

/// A recording session holding `lines` packet lines.
fn session_with_lines(lines: usize) -> Session {
    let interfaces = (0..8)
        .map(|i| {
            InterfaceDescriptor::new(format!("eth{}", i))
                .with_addresses(vec![format!("10.0.{}.1", i).parse().unwrap()])
        })
        .collect();
    let mut session = Session::new(interfaces);
    session.transition(Event::Resize {
        width: WIDTH,
        height: HEIGHT,
    });
    session.transition(Event::Confirm);
    for _ in 0..9 {
        session.transition(Event::CycleFocus(Direction::Forward));
    }
    session.transition(Event::Confirm);

    for i in 0..lines {
        session.transition(Event::PacketArrived(PacketRecord::new(format!(
            "12:00:{:02}.{:06} TCP 10.0.0.{}:{} > 93.184.216.34:443 [.] len {}",
            i % 60,
            i,
            i % 254,
            40000 + (i % 20000),
            60 + i % 1400
        ))));
    }
    session
}

fn bench_render_scrollback(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scrollback");

    for lines in [0usize, 1_000, 10_000, 100_000] {
        let session = session_with_lines(lines);
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

        group.bench_with_input(BenchmarkId::new("tail", lines), &session, |b, session| {
            b.iter(|| {
                terminal
                    .draw(|frame| ui::render(frame, black_box(session)))
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_render_scrolled(c: &mut Criterion) {
    let mut session = session_with_lines(100_000);
    session.transition(Event::Scroll(ScrollOp::Top));
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

    c.bench_function("render_scrolled_to_top_100000", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| ui::render(frame, black_box(&session)))
                .unwrap();
        });
    });
}

fn bench_packet_transition(c: &mut Criterion) {
    c.bench_function("packet_arrived_transition", |b| {
        let mut session = session_with_lines(0);
        b.iter(|| {
            let commands =
                session.transition(Event::PacketArrived(PacketRecord::new("12:00:00.000000 UDP")));
            black_box(commands)
        });
    });
}

criterion_group!(
    benches,
    bench_render_scrollback,
    bench_render_scrolled,
    bench_packet_transition
);
criterion_main!(benches);
