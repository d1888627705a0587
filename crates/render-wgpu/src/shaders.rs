/// WGSL shader for pixel-space strip quads.
///
/// Vertices arrive in screen pixels (y down); the vertex stage converts to
/// NDC using the screen size uniform.
pub const STRIP_SHADER: &str = r#"
struct ScreenUniforms {
    // xy = screen size in pixels, zw unused
    size: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> screen: ScreenUniforms;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_strip(vertex: VertexInput) -> VertexOutput {
    let ndc = vec2<f32>(
        vertex.position.x / screen.size.x * 2.0 - 1.0,
        1.0 - vertex.position.y / screen.size.y * 2.0,
    );
    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_strip(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;
