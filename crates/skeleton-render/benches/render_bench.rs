use criterion::{Criterion, black_box, criterion_group, criterion_main};
use skeleton_model::{
    BlendMode, BoneData, MeshAttachment, RegionAttachment, Skeleton, SlotData, TextureId,
    TextureRegion, VertexAttachment,
};
use skeleton_render::{CommandRecorder, SkeletonRenderer};

/// A chain of bones, each slot alternating between a region and a small mesh,
/// with a blend mode change every 8 slots.
fn build_skeleton(texture: TextureId, slot_count: usize) -> Skeleton {
    let bones = (0..slot_count)
        .map(|i| BoneData {
            x: 4.0,
            rotation: 3.0,
            ..BoneData::new(format!("bone{i}"), i.checked_sub(1))
        })
        .collect();
    let slots = (0..slot_count)
        .map(|i| SlotData {
            blend_mode: if (i / 8) % 2 == 0 {
                BlendMode::Normal
            } else {
                BlendMode::Additive
            },
            ..SlotData::new(format!("slot{i}"), i)
        })
        .collect();
    let mut skeleton = Skeleton::new(bones, slots);

    let region = TextureRegion::whole(texture, 32.0, 32.0);
    for i in 0..slot_count {
        if i % 2 == 0 {
            skeleton.set_attachment(i, Some(RegionAttachment::new("quad", region.clone()).into()));
        } else {
            let grid: Vec<f32> = (0..16)
                .flat_map(|v| [(v % 4) as f32 * 8.0, (v / 4) as f32 * 8.0])
                .collect();
            let uvs = grid.iter().map(|c| c / 24.0).collect();
            let triangles = (0..9u16)
                .flat_map(|cell| {
                    let base = cell / 3 * 4 + cell % 3;
                    [base, base + 1, base + 5, base + 5, base + 4, base]
                })
                .collect();
            let mesh = MeshAttachment::new(
                "grid",
                region.clone(),
                VertexAttachment::unweighted(grid),
                uvs,
                triangles,
            );
            skeleton.set_attachment(i, Some(mesh.into()));
        }
    }
    skeleton.update_world_transform();
    skeleton
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("polygons_64_slots", |b| {
        let mut recorder = CommandRecorder::new();
        let texture = recorder.register_texture();
        let skeleton = build_skeleton(texture, 64);
        let mut renderer = SkeletonRenderer::new();
        b.iter(|| {
            recorder.clear_commands();
            renderer
                .draw_polygons(&mut recorder, black_box(&skeleton))
                .unwrap();
        });
    });

    group.bench_function("two_color_64_slots", |b| {
        let mut recorder = CommandRecorder::two_color();
        let texture = recorder.register_texture();
        let skeleton = build_skeleton(texture, 64);
        let mut renderer = SkeletonRenderer::new();
        b.iter(|| {
            recorder.clear_commands();
            renderer
                .draw_polygons(&mut recorder, black_box(&skeleton))
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
