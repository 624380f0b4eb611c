//! Buffer and winding invariants shared by every mesh generator.
//!
//! Each case builds one mesh and checks it against the layout contract:
//! 4-component records, whole triangles, in-range indices, and triangles
//! whose geometric normal agrees with the normals at their corners.

use glam::Vec3;
use rstest::rstest;

use meshforge_core::mesh::generators::{
    generate_cube, generate_cylinder, generate_icosphere, generate_square,
};
use meshforge_core::mesh::{Drawable, MeshBuffers};

fn corner(mesh: &MeshBuffers, index: u32) -> (Vec3, Vec3) {
    let [px, py, pz, pw] = mesh.position(index as usize).expect("position in range");
    let [nx, ny, nz, nw] = mesh.normal(index as usize).expect("normal in range");
    assert_eq!(pw, 1.0, "positions are points");
    assert_eq!(nw, 0.0, "normals are directions");
    (Vec3::new(px, py, pz), Vec3::new(nx, ny, nz))
}

#[rstest]
#[case::cylinder_log(generate_cylinder(Vec3::new(0.0, -1.5, 0.0), 1.0, 5.0, 32, 1))]
#[case::cylinder_minimal(generate_cylinder(Vec3::ZERO, 1.0, 1.0, 3, 1))]
#[case::cylinder_clamped(generate_cylinder(Vec3::ZERO, 0.5, 2.0, 0, 0))]
#[case::cylinder_tall(generate_cylinder(Vec3::new(3.0, 1.0, -2.0), 0.25, 40.0, 7, 16))]
#[case::icosphere_base(generate_icosphere(Vec3::ZERO, 1.0, 0))]
#[case::icosphere_body(generate_icosphere(Vec3::ZERO, 1.0, 5))]
#[case::cube(generate_cube(Vec3::new(1.0, 2.0, 3.0), 0.75))]
#[case::square(generate_square(Vec3::ZERO, 1.0))]
fn buffers_respect_layout(#[case] mesh: MeshBuffers) {
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.positions().len(), 4 * mesh.vertex_count());
    assert_eq!(mesh.normals().len(), 4 * mesh.vertex_count());
    assert_eq!(mesh.index_count() % 3, 0);
    assert!(mesh
        .indices()
        .iter()
        .all(|&index| (index as usize) < mesh.vertex_count()));
}

#[rstest]
#[case::cylinder_log(generate_cylinder(Vec3::new(0.0, -1.5, 0.0), 1.0, 5.0, 32, 1))]
#[case::cylinder_minimal(generate_cylinder(Vec3::ZERO, 1.0, 1.0, 3, 1))]
#[case::cylinder_tall(generate_cylinder(Vec3::new(3.0, 1.0, -2.0), 0.25, 40.0, 7, 16))]
#[case::cylinder_flat(generate_cylinder(Vec3::ZERO, 10.0, 0.1, 64, 2))]
#[case::icosphere_base(generate_icosphere(Vec3::ZERO, 1.0, 0))]
#[case::icosphere_refined(generate_icosphere(Vec3::new(0.0, 4.0, 0.0), 2.0, 3))]
#[case::cube(generate_cube(Vec3::new(1.0, 2.0, 3.0), 0.75))]
#[case::square(generate_square(Vec3::ZERO, 1.0))]
fn triangles_face_outward(#[case] mesh: MeshBuffers) {
    for (triangle, [a, b, c]) in mesh.triangles().enumerate() {
        let (pa, na) = corner(&mesh, a);
        let (pb, nb) = corner(&mesh, b);
        let (pc, nc) = corner(&mesh, c);

        let face = (pb - pa).cross(pc - pa);
        assert!(face.length() > 0.0, "triangle {triangle} is degenerate");
        for normal in [na, nb, nc] {
            assert!(
                face.dot(normal) > 0.0,
                "triangle {triangle} ({a}, {b}, {c}) is inverted"
            );
        }
    }
}

#[test]
fn cylinder_scenario_from_demo_scene() {
    let mesh = generate_cylinder(Vec3::ZERO, 1.0, 5.0, 32, 1);
    assert_eq!(mesh.vertex_count(), 2 * 33 + 2 * 34);
    assert_eq!(mesh.position(0), Some([-2.5, 1.0, 0.0, 1.0]));
    assert_eq!(mesh.normal(0), Some([0.0, 1.0, 0.0, 0.0]));
}

#[rstest]
#[case(3, 1)]
#[case(4, 1)]
#[case(32, 1)]
#[case(5, 6)]
#[case(100, 3)]
fn cylinder_vertex_count_formula(#[case] radial: u32, #[case] length: u32) {
    let mesh = generate_cylinder(Vec3::ZERO, 1.0, 1.0, radial, length);
    let (r, l) = (radial as usize, length as usize);
    assert_eq!(mesh.vertex_count(), (l + 1) * (r + 1) + 2 * (r + 2));
    assert_eq!(mesh.index_count(), 6 * r * l + 6 * r);
}

#[test]
fn cylinder_clamps_degenerate_segment_counts() {
    assert_eq!(
        generate_cylinder(Vec3::ZERO, 1.0, 2.0, 1, 1),
        generate_cylinder(Vec3::ZERO, 1.0, 2.0, 3, 1)
    );
    assert_eq!(
        generate_cylinder(Vec3::ZERO, 1.0, 2.0, 8, 0),
        generate_cylinder(Vec3::ZERO, 1.0, 2.0, 8, 1)
    );
}

#[test]
fn generators_are_usable_as_drawables() {
    let meshes = [
        generate_square(Vec3::ZERO, 1.0),
        generate_cube(Vec3::ZERO, 1.0),
        generate_icosphere(Vec3::ZERO, 1.0, 1),
        generate_cylinder(Vec3::ZERO, 1.0, 5.0, 32, 1),
    ];
    let labels: Vec<&str> = meshes
        .iter()
        .map(|mesh| Drawable::label(mesh))
        .collect();
    assert_eq!(labels, ["square", "cube", "icosphere", "cylinder"]);
}
