use shapefield_engine::ShapeField;

#[test]
fn perf_smoke_tick() {
    let mut field = ShapeField::new();
    field.enable_perf_metrics(true);
    field.set_viewport(1280.0, 720.0);
    for i in 0..120 {
        field.pointer_move(640.0 + i as f32 * 2.0, 360.0);
        field.tick(1.0 / 60.0);
    }
    let stats = field.get_tick_stats();
    assert!(stats.tick_ms() >= 0.0);
    assert_eq!(stats.frame(), 120);
    assert_eq!(stats.shapes_updated(), 15);
    assert_eq!(stats.skipped_bodies(), 0);
}
