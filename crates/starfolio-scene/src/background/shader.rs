/// Point-sprite shader shared by the star and nebula clouds
///
/// Sprites keep a constant world size, so their on-screen size shrinks with
/// distance. The per-point size is blended with the material size.
pub const SHADER_POINTS: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec3<f32>,
    time: f32,
    resolution: vec2<f32>,
    fog_density: f32,
    rotation_y: f32,
};

struct Material {
    size: f32,
    opacity: f32,
    spin: f32,
    _pad: f32,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;
@group(1) @binding(0) var<uniform> material: Material;

struct PointIn {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
    @location(2) size: f32,
};

struct VsOut {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) corner: vec2<f32>,
    @location(2) alpha: f32,
};

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32, point: PointIn) -> VsOut {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
    );
    let corner = corners[vertex_index];

    // Turn the cloud around the y axis
    let angle = uniforms.rotation_y * material.spin;
    let c = cos(angle);
    let s = sin(angle);
    let p = point.position;
    let world = vec3<f32>(c * p.x + s * p.z, p.y, -s * p.x + c * p.z);

    var clip = uniforms.view_proj * vec4<f32>(world, 1.0);

    // Attenuated size: pixels = size * (height / 2) / depth, which in clip
    // space is independent of depth
    let size = mix(material.size, point.size, 0.5);
    let aspect = uniforms.resolution.y / max(uniforms.resolution.x, 1.0);
    clip.x += corner.x * size * 0.5 * aspect;
    clip.y += corner.y * size * 0.5;

    // Exponential-squared fog toward black
    let depth = distance(world, uniforms.camera_pos);
    let fog = 1.0 - exp(-pow(uniforms.fog_density * depth, 2.0));

    var out: VsOut;
    out.position = clip;
    out.color = point.color;
    out.corner = corner;
    out.alpha = material.opacity * (1.0 - fog);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let r = length(in.corner);
    if (r > 1.0) {
        discard;
    }
    let falloff = 1.0 - smoothstep(0.6, 1.0, r);
    return vec4<f32>(in.color, in.alpha * falloff);
}
"#;
