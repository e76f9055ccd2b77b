use spherical_viewer::shader::{PROJECTION_SHADER_SOURCE, TEXTURED_SHADER_SOURCE};
use spherical_viewer::uniforms::{ProjectionUniforms, QuadUniforms};
use std::fs;
use std::path::Path;

#[test]
fn test_shader_files_exist() {
    for name in ["projection.wgsl", "textured.wgsl"] {
        let shader_path = Path::new("src/shaders").join(name);
        assert!(shader_path.exists(), "Shader file should exist at {:?}", shader_path);
    }
}

#[test]
fn test_embedded_sources_match_files() {
    let projection = fs::read_to_string("src/shaders/projection.wgsl").expect("Failed to read shader file");
    let textured = fs::read_to_string("src/shaders/textured.wgsl").expect("Failed to read shader file");
    assert_eq!(projection, PROJECTION_SHADER_SOURCE);
    assert_eq!(textured, TEXTURED_SHADER_SOURCE);
}

#[test]
fn test_shaders_share_quad_interface() {
    for source in [PROJECTION_SHADER_SOURCE, TEXTURED_SHADER_SOURCE] {
        assert!(source.contains("@vertex"), "Shader should contain vertex entry point");
        assert!(source.contains("@fragment"), "Shader should contain fragment entry point");
        assert!(source.contains("fn vs_main"));
        assert!(source.contains("fn fs_main"));

        assert!(source.contains("@group(0) @binding(0) var<uniform>"));
        assert!(source.contains("@group(0) @binding(1)"));
        assert!(source.contains("@group(0) @binding(2)"));

        assert!(source.contains("@location(0) position: vec2<f32>"));
        assert!(source.contains("@location(1) tex_coord: vec2<f32>"));
        assert!(source.contains("mvp * vec4<f32>(input.position, 0.0, 1.0)"));
    }
}

#[test]
fn test_projection_shader_math() {
    let source = PROJECTION_SHADER_SOURCE;
    assert!(source.contains("rotation: vec2<f32>"));
    assert!(source.contains("resolution: vec2<f32>"));

    assert!(source.contains("sqrt(max(0.0, 1.0 - x * x - y * y))"), "Depth term should never go negative");
    assert!(source.contains("asin(clamp(y, -1.0, 1.0))"));
    assert!(source.contains("atan2(x, depth) + rotation.x"));
    assert!(source.contains("longitude / (2.0 * PI)"));
    assert!(source.contains("latitude / PI + 0.5"));
    assert!(source.contains("1.0 - sample_uv.y"));
}

#[test]
fn test_uniform_sizes() {
    // mat4 + vec2 + vec2, no padding needed
    assert_eq!(std::mem::size_of::<ProjectionUniforms>(), 80);
    assert_eq!(std::mem::size_of::<QuadUniforms>(), 64);

    let uniforms: ProjectionUniforms = bytemuck::Zeroable::zeroed();
    assert_eq!(bytemuck::bytes_of(&uniforms).len() % 16, 0);
}
