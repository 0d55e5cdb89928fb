use criterion::{criterion_group, criterion_main, Criterion};

use beam_viewer::{
    BeamScene, DrawSurface, FixedTicks, FrameSink, PerspectiveCamera, SceneGraph,
    SurfaceDimensions,
};

struct NullSink;

impl FrameSink for NullSink {
    fn register_scene(&mut self, _scene: &SceneGraph) {}

    fn submit(
        &mut self,
        _scene: &SceneGraph,
        _camera: &PerspectiveCamera,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn dispose(&mut self) {}
}

struct FixedSurface(SurfaceDimensions);

impl DrawSurface for FixedSurface {
    fn dimensions(&self) -> SurfaceDimensions {
        self.0
    }
}

fn bench_build(c: &mut Criterion) {
    let surface = FixedSurface(SurfaceDimensions::new(500, 400));

    c.bench_function("build_scene", |b| {
        b.iter(|| BeamScene::build(Some(&surface), Box::new(NullSink)).unwrap())
    });
}

fn bench_ticks(c: &mut Criterion) {
    let surface = FixedSurface(SurfaceDimensions::new(500, 400));

    c.bench_function("tick_100_frames", |b| {
        b.iter_batched(
            || BeamScene::build(Some(&surface), Box::new(NullSink)).unwrap(),
            |mut session| {
                for _ in FixedTicks::new(100) {
                    session.tick().unwrap();
                }
                session
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_build, bench_ticks);
criterion_main!(benches);
