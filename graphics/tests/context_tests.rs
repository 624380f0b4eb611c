//! Integration tests for the rendering context and renderer.
//!
//! Tests are parameterized using `rstest` over the scene's meshes and run
//! against the headless `DummyContext`.

use glam::{Vec3, Vec4};
use rstest::rstest;

use meshforge_core::mesh::generators::{
    generate_cube, generate_cylinder, generate_icosphere, generate_square,
};
use meshforge_graphics::{
    Camera, Drawable, DummyContext, FrameStats, GpuMesh, GraphicsError, MeshBuffers,
    RenderContext, Renderer, ShaderProgram,
};

// ============================================================================
// Upload Tests
// ============================================================================

#[rstest]
#[case::square(generate_square(Vec3::ZERO, 1.0), 4, 6)]
#[case::cube(generate_cube(Vec3::ZERO, 1.0), 24, 36)]
#[case::icosphere(generate_icosphere(Vec3::ZERO, 1.0, 2), 162, 960)]
#[case::cylinder(generate_cylinder(Vec3::new(0.0, -1.5, 0.0), 1.0, 5.0, 32, 1), 134, 384)]
fn test_upload_keeps_counts(
    #[case] mesh: MeshBuffers,
    #[case] vertices: u32,
    #[case] indices: u32,
) {
    let mut ctx = DummyContext::new();
    let gpu = GpuMesh::upload(&mut ctx, &mesh).unwrap();

    assert_eq!(gpu.vertex_count(), vertices);
    assert_eq!(gpu.index_count(), indices);
    assert_eq!(gpu.label(), mesh.label());

    let uploaded = ctx.mesh(gpu.handle()).unwrap();
    assert_eq!(
        uploaded.byte_size,
        mesh.position_bytes().len() + mesh.normal_bytes().len() + mesh.index_bytes().len()
    );
}

#[test]
fn test_released_mesh_cannot_be_drawn() {
    let mut ctx = DummyContext::new();
    let renderer = Renderer::new(800, 600);
    let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

    let mesh = GpuMesh::upload(&mut ctx, &generate_cube(Vec3::ZERO, 0.5)).unwrap();
    let handle = mesh.handle();
    let stale = mesh.clone();
    mesh.release(&mut ctx).unwrap();

    let err = renderer
        .render(
            &mut ctx,
            &camera,
            &mut ShaderProgram::lambert(),
            Vec4::ONE,
            0.0,
            &[&stale],
            1.0,
            1.0,
        )
        .unwrap_err();
    assert_eq!(err, GraphicsError::UnknownMesh(handle));
    assert_eq!(ctx.total_draw_calls(), 0);
}

// ============================================================================
// Frame Tests
// ============================================================================

/// Draw the same meshes for several frames and check that each clear starts
/// a fresh frame while totals keep accumulating.
#[rstest]
#[case::one_frame(1)]
#[case::several_frames(4)]
fn test_frames_accumulate(#[case] frames: u32) {
    let mut ctx = DummyContext::new();
    let mut renderer = Renderer::new(1280, 720);
    renderer.set_clear_color(0.2, 0.2, 0.2, 1.0);
    renderer.set_size(&mut ctx, 1280, 720).unwrap();

    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    camera.set_aspect_ratio(renderer.aspect_ratio());
    camera.update_projection_matrix();

    let square = GpuMesh::upload(&mut ctx, &generate_square(Vec3::ZERO, 1.0)).unwrap();
    let body = GpuMesh::upload(&mut ctx, &generate_icosphere(Vec3::ZERO, 1.0, 1)).unwrap();
    let mut program = ShaderProgram::body();

    let mut total = FrameStats::default();
    for frame in 0..frames {
        renderer.clear(&mut ctx);
        total += renderer
            .render(
                &mut ctx,
                &camera,
                &mut program,
                Vec4::new(1.0, 0.0, 0.0, 1.0),
                frame as f32 * 0.1,
                &[&square, &body],
                1.2,
                1.0,
            )
            .unwrap();
        assert_eq!(ctx.frame_draw_calls().len(), 2);
    }

    assert_eq!(total.draw_calls, 2 * frames);
    assert_eq!(total.triangles, u64::from(frames) * (2 + 80));
    assert_eq!(ctx.clear_count(), u64::from(frames));
    assert_eq!(ctx.total_draw_calls(), u64::from(2 * frames));
    assert_eq!(ctx.clear_color(), [0.2, 0.2, 0.2, 1.0]);
}

#[test]
fn test_uniform_block_reaches_context() {
    let mut ctx = DummyContext::new();
    let renderer = Renderer::new(1280, 720);
    let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let mesh = GpuMesh::upload(&mut ctx, &generate_square(Vec3::ZERO, 1.0)).unwrap();

    let mut program = ShaderProgram::background();
    renderer
        .render(
            &mut ctx,
            &camera,
            &mut program,
            Vec4::ONE,
            2.0,
            &[&mesh],
            0.5,
            1.5,
        )
        .unwrap();

    let call = &ctx.frame_draw_calls()[0];
    assert_eq!(&call.uniforms, program.uniforms());
    assert_eq!(call.uniforms.as_bytes().len(), 160);
    assert_eq!(call.uniforms.speed, 1.5);
    assert_eq!(ctx.name(), "Dummy");
}
