use dotclock_engine::{ClockFace, ClockTime, RecordingRenderer, Simulation};

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(1024.0, 512.0).with_seed(7);
    sim.enable_perf_metrics(true);
    for x in 0..64 {
        for y in 0..16 {
            sim.activate(40.0 + x as f64 * 14.0, 40.0 + y as f64 * 14.0);
        }
    }
    let mut r = RecordingRenderer::new();
    sim.step(0.016, &mut r);
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.spawns(), 1024);
    assert_eq!(stats.trails_drawn(), sim.active_count() as u32);
    assert!(stats.memory_bytes() > 0);
}

#[test]
fn perf_smoke_clock_minute() {
    let mut sim = Simulation::new(1024.0, 512.0).with_seed(3);
    let mut face = ClockFace::new(1024.0, 512.0);
    let mut r = RecordingRenderer::new();

    // One frame per second for a minute, each at 16ms spacing
    let start = 11 * 3600 + 59 * 60;
    for i in 0..60u64 {
        r.clear();
        face.frame(ClockTime::from_seconds(start + i), i as f64 * 16.0, &mut sim, &mut r);
    }
    assert!(sim.active_count() > 0);
    assert!(sim.active_count() <= sim.capacity());
    assert_eq!(sim.frame(), 60);
}
